//! The HRM registry.
//!
//! `HrmSystem` owns every employee and manager, hands out ids and keeps names
//! unique. Managers refer to the people they manage through
//! [`EmployeeHandle`]s into the registry's own store.

use crate::core::import::{self, ImportOutcome, ImportSummary, ParsedRole};
use crate::core::report::{self, EmployeeRecord, RegistrySnapshot, REPORT_HEADER};
use crate::domain::model::{Competence, Employee, EmployeeHandle, EmployeeId, ManagerView};
use crate::domain::ports::{DiagnosticSink, LineDiagnostic, LineSink, LineSource};
use crate::utils::error::{HrmError, Result};
use std::fmt;

pub const DEFAULT_IMPORT_EXTENSION: &str = "txt";

#[derive(Debug, Clone)]
pub struct HrmSystem {
    employees: Vec<Employee>,
    import_extension: String,
}

impl Default for HrmSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl HrmSystem {
    pub fn new() -> Self {
        Self::with_import_extension(DEFAULT_IMPORT_EXTENSION)
    }

    /// Registry whose imports open `<name>.<extension>`.
    pub fn with_import_extension(extension: impl Into<String>) -> Self {
        Self {
            employees: Vec::new(),
            import_extension: extension.into(),
        }
    }

    pub fn import_extension(&self) -> &str {
        &self.import_extension
    }

    fn find(&self, name: &str) -> Option<EmployeeHandle> {
        self.employees
            .iter()
            .position(|employee| employee.name() == name)
            .map(EmployeeHandle)
    }

    fn insert(&mut self, mut employee: Employee) -> Result<EmployeeId> {
        if self.find(employee.name()).is_some() {
            return Err(HrmError::DuplicateName {
                name: employee.name().to_string(),
            });
        }

        let id = EmployeeId(self.employees.len() + 1);
        employee.assign_id(id);
        tracing::debug!("Added {}", employee);
        self.employees.push(employee);
        Ok(id)
    }

    pub fn add_manager(&mut self, name: &str, salary: i32) -> Result<EmployeeId> {
        self.insert(Employee::manager(name, salary))
    }

    pub fn add_employee(&mut self, name: &str, salary: i32) -> Result<EmployeeId> {
        self.insert(Employee::new(name, salary))
    }

    /// Makes `manager_name` a manager of `employee_name`. Assigning the same
    /// pair twice lists the employee twice.
    pub fn assign_manager(&mut self, manager_name: &str, employee_name: &str) -> Result<()> {
        let employee = self.find(employee_name).ok_or_else(|| HrmError::UnknownName {
            name: employee_name.to_string(),
        })?;

        let not_a_manager = || HrmError::NotAManager {
            name: manager_name.to_string(),
        };
        let manager = self.find(manager_name).ok_or_else(not_a_manager)?;
        if !self.employees[manager.index()].add_managed(employee) {
            return Err(not_a_manager());
        }

        tracing::debug!("{} now manages {}", manager_name, employee_name);
        Ok(())
    }

    pub fn number_of_employees(&self) -> usize {
        self.employees.len()
    }

    pub fn number_of_managers(&self) -> usize {
        self.employees.iter().filter(|e| e.is_manager()).count()
    }

    fn manager_view(&self, manager_name: &str) -> Result<ManagerView<'_>> {
        let employee = self.employee(manager_name).ok_or_else(|| HrmError::UnknownName {
            name: manager_name.to_string(),
        })?;
        employee.as_manager().ok_or_else(|| HrmError::NotAManager {
            name: manager_name.to_string(),
        })
    }

    pub fn number_of_employees_managed_by_manager(&self, manager_name: &str) -> Result<usize> {
        Ok(self.manager_view(manager_name)?.managed_count())
    }

    pub fn managed_employees(&self, manager_name: &str) -> Result<Vec<&Employee>> {
        let view = self.manager_view(manager_name)?;
        Ok(view
            .managed()
            .iter()
            .map(|handle| &self.employees[handle.index()])
            .collect())
    }

    /// Levels outside 0..=2 are clamped.
    pub fn add_competence(
        &mut self,
        employee_name: &str,
        competence_name: &str,
        level: i32,
    ) -> Result<()> {
        let handle = self.find(employee_name).ok_or_else(|| HrmError::UnknownName {
            name: employee_name.to_string(),
        })?;

        let competence = Competence::new(competence_name, level);
        tracing::debug!("{} gains competence {}", employee_name, competence);
        self.employees[handle.index()].add_competence(competence);
        Ok(())
    }

    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.find(name).map(|handle| &self.employees[handle.index()])
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Reads `<base_name>.<extension>` from `source`.
    ///
    /// Blank lines and lines starting with `#` are ignored. A malformed line is
    /// handed to `diagnostics` and skipped. Imported records go through the
    /// same duplicate check and id assignment as [`HrmSystem::add_employee`],
    /// so a line repeating an existing name is skipped as well.
    ///
    /// A missing resource is reported as [`ImportOutcome::ResourceNotFound`];
    /// only a failure while reading an opened resource is an `Err`.
    pub fn read_employees_from_file<S, D>(
        &mut self,
        source: &S,
        base_name: &str,
        diagnostics: &mut D,
    ) -> Result<ImportOutcome>
    where
        S: LineSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        let resource = format!("{}.{}", base_name, self.import_extension);
        let lines = match source.read_lines(&resource) {
            Ok(lines) => lines,
            Err(HrmError::ResourceNotFound { resource }) => {
                return Ok(ImportOutcome::ResourceNotFound { resource });
            }
            Err(e) => return Err(e),
        };

        let mut summary = ImportSummary::default();
        for (index, line) in lines.enumerate() {
            let line_number = index + 1;
            // The reader has already consumed an undecodable line, so the
            // next one can still be read.
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    summary.skipped += 1;
                    diagnostics.report(LineDiagnostic {
                        line: line_number,
                        content: String::new(),
                        reason: "Line is not valid UTF-8".to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if import::is_skippable(&line) {
                continue;
            }

            match self.apply_line(line_number, &line) {
                Ok(_) => summary.imported += 1,
                Err(HrmError::LineFormat { line: number, reason }) => {
                    summary.skipped += 1;
                    diagnostics.report(LineDiagnostic {
                        line: number,
                        content: line,
                        reason,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Imported {} employee(s) from {} ({} line(s) skipped)",
            summary.imported,
            resource,
            summary.skipped
        );
        Ok(ImportOutcome::Imported(summary))
    }

    fn apply_line(&mut self, line_number: usize, line: &str) -> Result<EmployeeId> {
        let parsed = import::parse_line(line_number, line)?;

        let employee = match parsed.role {
            ParsedRole::Staff => Employee::new(parsed.name, parsed.salary),
            ParsedRole::Manager { subordinates } => {
                let mut manager = Employee::manager(parsed.name, parsed.salary);
                for name in &subordinates {
                    let handle = self.find(name).ok_or_else(|| HrmError::LineFormat {
                        line: line_number,
                        reason: format!("Unknown employee '{}'", name),
                    })?;
                    manager.add_managed(handle);
                }
                manager
            }
        };

        self.insert(employee).map_err(|e| match e {
            HrmError::DuplicateName { .. } => HrmError::LineFormat {
                line: line_number,
                reason: e.to_string(),
            },
            other => other,
        })
    }

    pub fn report_lines(&self) -> Vec<String> {
        std::iter::once(REPORT_HEADER.to_string())
            .chain(self.employees.iter().map(report::report_line))
            .collect()
    }

    /// Writes the summary report, replacing whatever `resource` held before.
    pub fn write_report_to_file<S>(&self, sink: &S, resource: &str) -> Result<()>
    where
        S: LineSink + ?Sized,
    {
        sink.write_lines(resource, &self.report_lines())?;
        tracing::info!(
            "Wrote report for {} employee(s) to {}",
            self.employees.len(),
            resource
        );
        Ok(())
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let employees = self
            .employees
            .iter()
            .map(|employee| EmployeeRecord {
                id: employee.id(),
                name: employee.name().to_string(),
                salary: employee.salary(),
                competences: employee.competences().to_vec(),
                manages: employee.as_manager().map(|view| {
                    view.managed()
                        .iter()
                        .map(|handle| self.employees[handle.index()].id())
                        .collect()
                }),
            })
            .collect();

        RegistrySnapshot {
            employees,
            managers: self.number_of_managers(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

impl fmt::Display for HrmSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Summary ({} employee(s)):", self.employees.len())?;
        for employee in &self.employees {
            write!(f, "\n{}", employee)?;
        }
        Ok(())
    }
}
