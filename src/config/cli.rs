use crate::config::toml_config::HrmConfig;
use crate::utils::error::{HrmError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hrm")]
#[command(about = "Import employee records and write an HRM summary report")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory that import files and the report are resolved against
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Import file names, without extension
    #[arg(short, long, value_delimiter = ',')]
    pub input: Vec<String>,

    /// Competence to add after importing, as EMPLOYEE:COMPETENCE:LEVEL
    #[arg(long = "competence", value_name = "EMPLOYEE:COMPETENCE:LEVEL")]
    pub competences: Vec<String>,

    /// Report file to write
    #[arg(short, long)]
    pub report: Option<String>,

    /// Print a JSON snapshot of the registry
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line values take precedence over the configuration file.
    pub fn apply_to(&self, config: &mut HrmConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.storage.base_path = data_dir.clone();
        }
        if !self.input.is_empty() {
            config.import.files = self.input.clone();
        }
        if let Some(report) = &self.report {
            config.report.output = Some(report.clone());
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }

    pub fn parsed_competences(&self) -> Result<Vec<CompetenceArg>> {
        self.competences
            .iter()
            .map(|arg| parse_competence_arg(arg))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetenceArg {
    pub employee: String,
    pub competence: String,
    pub level: i32,
}

pub fn parse_competence_arg(arg: &str) -> Result<CompetenceArg> {
    let invalid = |reason: &str| HrmError::InvalidConfigValueError {
        field: "competence".to_string(),
        value: arg.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = arg.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(employee), Some(competence), Some(level))
            if !employee.is_empty() && !competence.is_empty() =>
        {
            let level = level
                .trim()
                .parse()
                .map_err(|_| invalid("Level must be a number"))?;
            Ok(CompetenceArg {
                employee: employee.to_string(),
                competence: competence.to_string(),
                level,
            })
        }
        _ => Err(invalid("Expected EMPLOYEE:COMPETENCE:LEVEL")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_competence_arg() {
        let arg = parse_competence_arg("Evert:Programming:2").unwrap();
        assert_eq!(arg.employee, "Evert");
        assert_eq!(arg.competence, "Programming");
        assert_eq!(arg.level, 2);

        assert!(parse_competence_arg("Evert:Programming").is_err());
        assert!(parse_competence_arg("Evert:Programming:high").is_err());
        assert!(parse_competence_arg(":Programming:1").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = CliConfig::parse_from([
            "hrm",
            "--data-dir",
            "/tmp/hrm",
            "--input",
            "staff,managers",
            "--report",
            "out.txt",
            "--competence",
            "Evert:Programming:5",
            "-v",
        ]);

        let mut config = HrmConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.storage.base_path, "/tmp/hrm");
        assert_eq!(config.import.files, vec!["staff", "managers"]);
        assert_eq!(config.report.output.as_deref(), Some("out.txt"));
        assert!(config.logging.verbose);
        assert_eq!(cli.parsed_competences().unwrap()[0].level, 5);
    }

    #[test]
    fn test_cli_keeps_config_values_when_absent() {
        let cli = CliConfig::parse_from(["hrm"]);
        let mut config = HrmConfig::default();
        config.import.files = vec!["employees".to_string()];
        cli.apply_to(&mut config);

        assert_eq!(config.import.files, vec!["employees"]);
        assert_eq!(config.storage.base_path, ".");
    }
}
