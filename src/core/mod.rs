pub mod import;
pub mod registry;
pub mod report;

pub use crate::domain::model::{Competence, Employee, EmployeeId, ManagerView};
pub use crate::domain::ports::{DiagnosticSink, LineDiagnostic, LineSink, LineSource};
pub use crate::utils::error::Result;
