use crate::domain::model::{Competence, Employee, EmployeeId};
use serde::Serialize;

pub const REPORT_HEADER: &str = "### HRM System Summary ###";

pub fn report_line(employee: &Employee) -> String {
    if employee.competences().is_empty() {
        return format!("{} ({}) has no competences", employee.name(), employee.id());
    }

    let competences = employee
        .competences()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} ({}) has competences: {}",
        employee.name(),
        employee.id(),
        competences
    )
}

/// Serializable view of the registry, with managed employees given by id.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub employees: Vec<EmployeeRecord>,
    pub managers: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub salary: i32,
    pub competences: Vec<Competence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manages: Option<Vec<EmployeeId>>,
}
