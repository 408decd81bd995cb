pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{diagnostics::TracingDiagnostics, storage::LocalStorage, storage::MemoryStorage};
pub use config::HrmConfig;
pub use core::import::{ImportOutcome, ImportSummary};
pub use core::registry::HrmSystem;
pub use domain::model::{Competence, Employee, EmployeeId};
pub use utils::error::{HrmError, Result};
