use serde::Serialize;
use std::fmt;

pub const MIN_COMPETENCE_LEVEL: i32 = 0;
pub const MAX_COMPETENCE_LEVEL: i32 = 2;

/// Registry-assigned identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub usize);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an employee in the registry store. Only the registry hands
/// these out, and entries are never removed, so a handle stays valid for the
/// registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeHandle(pub(crate) usize);

impl EmployeeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competence {
    name: String,
    level: u8,
}

impl Competence {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        let level = level.clamp(MIN_COMPETENCE_LEVEL, MAX_COMPETENCE_LEVEL) as u8;
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl fmt::Display for Competence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Role {
    Staff,
    Manager { managed: Vec<EmployeeHandle> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    salary: i32,
    id: Option<EmployeeId>,
    competences: Vec<Competence>,
    role: Role,
}

impl Employee {
    /// An employee whose id is filled in when the registry stores it.
    pub fn new(name: impl Into<String>, salary: i32) -> Self {
        Self {
            name: name.into(),
            salary,
            id: None,
            competences: Vec::new(),
            role: Role::Staff,
        }
    }

    pub fn with_id(name: impl Into<String>, salary: i32, id: EmployeeId) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, salary)
        }
    }

    pub fn manager(name: impl Into<String>, salary: i32) -> Self {
        Self {
            role: Role::Manager {
                managed: Vec::new(),
            },
            ..Self::new(name, salary)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> i32 {
        self.salary
    }

    /// Zero until the registry has assigned an id.
    pub fn id(&self) -> EmployeeId {
        self.id.unwrap_or(EmployeeId(0))
    }

    pub fn competences(&self) -> &[Competence] {
        &self.competences
    }

    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager { .. })
    }

    pub fn as_manager(&self) -> Option<ManagerView<'_>> {
        match &self.role {
            Role::Manager { managed } => Some(ManagerView { managed }),
            Role::Staff => None,
        }
    }

    pub(crate) fn assign_id(&mut self, id: EmployeeId) {
        self.id = Some(id);
    }

    pub(crate) fn add_competence(&mut self, competence: Competence) {
        self.competences.push(competence);
    }

    /// Returns false when this employee is not a manager.
    pub(crate) fn add_managed(&mut self, handle: EmployeeHandle) -> bool {
        match &mut self.role {
            Role::Manager { managed } => {
                managed.push(handle);
                true
            }
            Role::Staff => false,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) with salary {}", self.name, self.id(), self.salary)?;
        if let Some(manager) = self.as_manager() {
            write!(f, " manages {} employees", manager.managed_count())?;
        }
        Ok(())
    }
}

/// The manager capability of an employee: the people it manages.
#[derive(Debug, Clone, Copy)]
pub struct ManagerView<'a> {
    managed: &'a [EmployeeHandle],
}

impl<'a> ManagerView<'a> {
    pub fn managed(&self) -> &'a [EmployeeHandle] {
        self.managed
    }

    pub fn managed_count(&self) -> usize {
        self.managed.len()
    }
}
