use crate::domain::person::{Person, PersonKind, Professor, Staff, Student};

pub trait PersonFactory {
    fn create_person(&self, name: &str) -> Box<dyn Person>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentFactory;

impl PersonFactory for StudentFactory {
    fn create_person(&self, name: &str) -> Box<dyn Person> {
        Box::new(Student::new(name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfessorFactory;

impl PersonFactory for ProfessorFactory {
    fn create_person(&self, name: &str) -> Box<dyn Person> {
        Box::new(Professor::new(name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaffFactory;

impl PersonFactory for StaffFactory {
    fn create_person(&self, name: &str) -> Box<dyn Person> {
        Box::new(Staff::new(name))
    }
}

/// 依照種類挑選對應的工廠
pub fn factory_for(kind: PersonKind) -> Box<dyn PersonFactory> {
    match kind {
        PersonKind::Student => Box::new(StudentFactory),
        PersonKind::Professor => Box::new(ProfessorFactory),
        PersonKind::Staff => Box::new(StaffFactory),
    }
}
