use anyhow::Context;
use clap::Parser;
use hrm_system::utils::{logger, validation::Validate};
use hrm_system::{CliConfig, HrmConfig, ImportOutcome, TracingDiagnostics};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match HrmConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => HrmConfig::default(),
    };
    cli.apply_to(&mut config);

    if config.json_logs() {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting hrm");
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = config.storage();
    let mut hrm = config.registry();
    let mut diagnostics = TracingDiagnostics::new();
    let mut missing = Vec::new();

    for file in &config.import.files {
        match hrm.read_employees_from_file(&storage, file, &mut diagnostics)? {
            ImportOutcome::Imported(summary) => {
                println!("✅ {}: {} employee(s) imported", file, summary.imported);
            }
            ImportOutcome::ResourceNotFound { resource } => {
                eprintln!("❌ File not found: {}", resource);
                missing.push(resource);
            }
        }
    }

    if diagnostics.reported() > 0 {
        eprintln!("⚠️ {} line(s) skipped during import", diagnostics.reported());
    }

    for arg in cli.parsed_competences()? {
        hrm.add_competence(&arg.employee, &arg.competence, arg.level)
            .with_context(|| format!("Cannot add competence '{}'", arg.competence))?;
    }

    if let Some(output) = &config.report.output {
        hrm.write_report_to_file(&storage, output)?;
        println!(
            "📁 Report saved to: {}",
            storage.base_path().join(output).display()
        );
    }

    if cli.json {
        println!("{}", hrm.to_json()?);
    } else {
        println!("{}", hrm);
    }

    if !missing.is_empty() {
        std::process::exit(2);
    }

    Ok(())
}
