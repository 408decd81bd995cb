use hrm_system::domain::ports::LineDiagnostic;
use hrm_system::{HrmConfig, HrmError, HrmSystem, ImportOutcome, LocalStorage, TracingDiagnostics};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_report_round_trip_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let mut hrm = HrmSystem::new();
    hrm.add_employee("Evert", 3000).unwrap();
    hrm.add_employee("Peter", 4000).unwrap();
    hrm.add_competence("Peter", "Programming", 2).unwrap();

    hrm.write_report_to_file(&storage, "report.txt").unwrap();

    let content = fs::read_to_string(temp_dir.path().join("report.txt")).unwrap();
    assert_eq!(
        content,
        "### HRM System Summary ###\n\
         Evert (1) has no competences\n\
         Peter (2) has competences: Programming (2)\n"
    );
}

#[test]
fn test_report_overwrites_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    fs::write(
        temp_dir.path().join("report.txt"),
        "stale\nstale\nstale\nstale\n",
    )
    .unwrap();

    let hrm = HrmSystem::new();
    hrm.write_report_to_file(&storage, "report.txt").unwrap();

    let content = fs::read_to_string(temp_dir.path().join("report.txt")).unwrap();
    assert_eq!(content, "### HRM System Summary ###\n");
}

#[test]
fn test_import_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("employees.txt"),
        "# comment\n\nEvert,3000\nPeter,4000,manager,Evert\nBadLine\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let mut diagnostics: Vec<LineDiagnostic> = Vec::new();

    let outcome = hrm
        .read_employees_from_file(&storage, "employees", &mut diagnostics)
        .unwrap();

    assert_eq!(outcome.count(), Some(2));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].content, "BadLine");
    assert_eq!(hrm.number_of_employees(), 2);
    assert_eq!(hrm.number_of_managers(), 1);
    assert_eq!(hrm.number_of_employees_managed_by_manager("Peter").unwrap(), 1);
}

#[test]
fn test_import_handles_windows_line_endings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("employees.txt"),
        "Evert,3000\r\nRuud,2500\r\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let outcome = hrm
        .read_employees_from_file(&storage, "employees", &mut Vec::<LineDiagnostic>::new())
        .unwrap();

    assert_eq!(outcome.count(), Some(2));
    assert_eq!(hrm.employee("Ruud").unwrap().salary(), 2500);
}

#[test]
fn test_import_skips_line_with_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("employees.txt"),
        b"Evert,3000\nJ\xf6rg,2000\nRuud,2500\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let mut diagnostics: Vec<LineDiagnostic> = Vec::new();
    let outcome = hrm
        .read_employees_from_file(&storage, "employees", &mut diagnostics)
        .unwrap();

    assert_eq!(outcome.count(), Some(2));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 2);
    assert_eq!(diagnostics[0].reason, "Line is not valid UTF-8");
    assert_eq!(hrm.employee("Ruud").unwrap().id().0, 2);
}

#[test]
fn test_import_bare_carriage_return_stays_in_the_line() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("employees.txt"),
        "Evert,3000\rRuud,2500\nAnna,3500\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let mut diagnostics: Vec<LineDiagnostic> = Vec::new();
    let outcome = hrm
        .read_employees_from_file(&storage, "employees", &mut diagnostics)
        .unwrap();

    assert_eq!(outcome.count(), Some(1));
    assert!(hrm.employee("Evert").is_none());
    assert!(hrm.employee("Ruud").is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].reason, "Salary must be a number");
}

#[test]
fn test_import_missing_file_returns_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let mut diagnostics = TracingDiagnostics::new();

    let outcome = hrm
        .read_employees_from_file(&storage, "does-not-exist", &mut diagnostics)
        .unwrap();

    assert!(matches!(outcome, ImportOutcome::ResourceNotFound { ref resource }
        if resource.ends_with("does-not-exist.txt")));
    assert_eq!(outcome.count(), None);
    assert_eq!(hrm.number_of_employees(), 0);
    assert_eq!(diagnostics.reported(), 0);
}

#[test]
fn test_import_then_mutate_then_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("staff.txt"),
        "Evert,3000\nRuud,2500\nPeter,4000,manager,Evert,Ruud\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut hrm = HrmSystem::new();
    let mut diagnostics = TracingDiagnostics::new();
    hrm.read_employees_from_file(&storage, "staff", &mut diagnostics)
        .unwrap();

    hrm.add_competence("Evert", "Programming", 2).unwrap();
    hrm.add_competence("Evert", "Cooperating", -1).unwrap();
    hrm.add_competence("Peter", "Research", 9).unwrap();
    hrm.add_competence("Peter", "Programming", 2).unwrap();

    let id = hrm.add_employee("Anna", 3500).unwrap();
    assert_eq!(id.0, 4);
    hrm.assign_manager("Peter", "Anna").unwrap();
    assert_eq!(hrm.number_of_employees_managed_by_manager("Peter").unwrap(), 3);

    let err = hrm.add_manager("Peter", 1).unwrap_err();
    assert!(matches!(err, HrmError::DuplicateName { .. }));

    hrm.write_report_to_file(&storage, "out/report.txt").unwrap();
    let content = fs::read_to_string(temp_dir.path().join("out/report.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "### HRM System Summary ###",
            "Evert (1) has competences: Programming (2), Cooperating (0)",
            "Ruud (2) has no competences",
            "Peter (3) has competences: Research (2), Programming (2)",
            "Anna (4) has no competences",
        ]
    );
}

#[test]
fn test_configured_registry_and_storage() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("people.dat"), "Evert,3000\n").unwrap();

    let toml_content = format!(
        "[storage]\nbase_path = \"{}\"\n\n[import]\nextension = \"dat\"\nfiles = [\"people\"]\n",
        temp_dir.path().display().to_string().replace('\\', "/")
    );
    let config = HrmConfig::from_toml_str(&toml_content).unwrap();

    let storage = config.storage();
    let mut hrm = config.registry();
    let outcome = hrm
        .read_employees_from_file(&storage, &config.import.files[0], &mut Vec::<LineDiagnostic>::new())
        .unwrap();

    assert_eq!(outcome.count(), Some(1));
}
