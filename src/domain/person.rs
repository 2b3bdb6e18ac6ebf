use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Professor,
    Staff,
}

impl PersonKind {
    pub fn label(self) -> &'static str {
        match self {
            PersonKind::Student => "Student",
            PersonKind::Professor => "Professor",
            PersonKind::Staff => "Staff",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Person: fmt::Debug {
    fn kind(&self) -> PersonKind;
    fn name(&self) -> &str;

    fn describe(&self) -> String {
        format!("{}: {}", self.kind().label(), self.name())
    }

    fn display_info(&self, sink: &mut dyn LineSink) -> Result<()> {
        sink.emit(&self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Person for Student {
    fn kind(&self) -> PersonKind {
        PersonKind::Student
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    name: String,
}

impl Professor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Person for Professor {
    fn kind(&self) -> PersonKind {
        PersonKind::Professor
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    name: String,
}

impl Staff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Person for Staff {
    fn kind(&self) -> PersonKind {
        PersonKind::Staff
    }

    fn name(&self) -> &str {
        &self.name
    }
}
