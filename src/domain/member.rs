use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeProfessor {
    name: String,
}

impl CompositeProfessor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        format!("Composite Professor: {}", self.name)
    }
}

/// A department owns its members by value, so it can never contain itself.
/// Equality, cloning, `Debug` and drop all avoid recursion, so nesting depth is limited
/// only by memory.
pub struct Department {
    name: String,
    members: Vec<UniversityMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniversityMember {
    Professor(CompositeProfessor),
    Department(Department),
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        format!("Department: {}", self.name)
    }

    pub fn members(&self) -> &[UniversityMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends without any duplicate check.
    pub fn add_member(&mut self, member: impl Into<UniversityMember>) {
        self.members.push(member.into());
    }

    /// Detaches the first member equal to `member` and hands it back.
    /// Returns `None` and leaves the department untouched when nothing matches.
    pub fn remove_member(&mut self, member: &UniversityMember) -> Option<UniversityMember> {
        let index = self.members.iter().position(|m| m == member)?;
        Some(self.members.remove(index))
    }

    pub fn display_details(&self, sink: &mut dyn LineSink) -> Result<()> {
        sink.emit(&self.describe())?;
        emit_preorder(self.members.iter().rev().collect(), sink)
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.name != right.name || left.members.len() != right.members.len() {
                return false;
            }
            for pair in left.members.iter().zip(&right.members) {
                match pair {
                    (UniversityMember::Professor(a), UniversityMember::Professor(b)) => {
                        if a != b {
                            return false;
                        }
                    }
                    (UniversityMember::Department(a), UniversityMember::Department(b)) => {
                        pending.push((a, b))
                    }
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Department {}

impl Clone for Department {
    fn clone(&self) -> Self {
        // 每個 frame 是 (來源, 複製中的部門)；子部門複製完才掛回父層
        let mut stack = vec![(self, Department::new(self.name.clone()))];
        let mut root = None;
        while let Some((source, copy)) = stack.last_mut() {
            let source: &Department = *source;
            match source.members.get(copy.members.len()) {
                Some(UniversityMember::Professor(professor)) => {
                    copy.members.push(professor.clone().into())
                }
                Some(UniversityMember::Department(child)) => {
                    stack.push((child, Department::new(child.name.clone())))
                }
                None => {
                    let Some((_, finished)) = stack.pop() else {
                        break;
                    };
                    match stack.last_mut() {
                        Some((_, parent)) => parent.members.push(finished.into()),
                        None => root = Some(finished),
                    }
                }
            }
        }
        root.unwrap_or_else(|| Department::new(self.name.clone()))
    }
}

// members 只印數量，避免遞迴格式化整棵樹
impl fmt::Debug for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Department")
            .field("name", &self.name)
            .field("members", &self.members.len())
            .finish()
    }
}

// 深層巢狀的部門若遞迴釋放可能耗盡堆疊，改為逐層攤平
impl Drop for Department {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.members);
        while let Some(member) = pending.pop() {
            if let UniversityMember::Department(mut department) = member {
                pending.append(&mut department.members);
            }
        }
    }
}

impl UniversityMember {
    pub fn name(&self) -> &str {
        match self {
            UniversityMember::Professor(professor) => professor.name(),
            UniversityMember::Department(department) => department.name(),
        }
    }

    pub fn display_details(&self, sink: &mut dyn LineSink) -> Result<()> {
        emit_preorder(vec![self], sink)
    }
}

impl From<CompositeProfessor> for UniversityMember {
    fn from(professor: CompositeProfessor) -> Self {
        UniversityMember::Professor(professor)
    }
}

impl From<Department> for UniversityMember {
    fn from(department: Department) -> Self {
        UniversityMember::Department(department)
    }
}

/// Pre-order walk driven by an explicit stack; `stack` holds pending members top-last.
fn emit_preorder(mut stack: Vec<&UniversityMember>, sink: &mut dyn LineSink) -> Result<()> {
    while let Some(member) = stack.pop() {
        match member {
            UniversityMember::Professor(professor) => sink.emit(&professor.describe())?,
            UniversityMember::Department(department) => {
                sink.emit(&department.describe())?;
                stack.extend(department.members.iter().rev());
            }
        }
    }
    Ok(())
}
