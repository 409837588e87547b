use predicates::prelude::*;

use test_env::{get_cmd, setup_test_env, stdout_of, SAMPLE_ROWS};

#[test]
fn test_default_command_shows_dashboard() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &[]);
    assert!(stdout.contains("=== Key Indicators ==="));
    assert!(stdout.contains("=== Status Distribution ==="));
    assert!(stdout.contains("=== Areas ==="));
    assert!(stdout.contains("Projects:            4 (5 rows)"));
    assert!(stdout.contains("Most common status:  atrasado (2)"));
    assert!(stdout.contains("Average completion:  63,9%"));
    assert!(stdout.contains("Planned cost:        R$ 3.800,00"));
    assert!(stdout.contains("Actual cost:         R$ 3.150,00"));
    assert!(stdout.contains("Cost variance:       17,1% below plan"));
}

#[test]
fn test_dashboard_subcommand_matches_default() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let default_out = stdout_of(&mut get_cmd(&temp_dir), &[]);
    let explicit_out = stdout_of(&mut get_cmd(&temp_dir), &["dashboard"]);
    assert_eq!(default_out, explicit_out);
}

#[test]
fn test_piped_output_has_no_ansi() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    get_cmd(&temp_dir)
        .args(&["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_status_table() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &["status"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Status"));
    assert!(lines[2].starts_with("atrasado"));
    assert!(lines[2].contains("40,0%"));
    assert!(lines[2].contains("#FF8C00"));
    assert!(stdout.contains("suspenso"));
    assert!(stdout.contains("#A9A9A9"), "unknown status uses the fallback color");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_areas_table() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &["areas"]);
    let eng = stdout.lines().find(|l| l.starts_with("Engenharia")).unwrap();
    assert!(eng.contains("R$ 4.000,00"));
    assert!(eng.contains("R$ 2.700,00"));
    assert!(eng.contains("R$ -1.300,00"));
    assert!(eng.contains("51,8%"));

    let fin = stdout.lines().find(|l| l.starts_with("Financeiro")).unwrap();
    assert!(fin.contains("R$ 800,00"));
    assert!(fin.contains("R$ -350,00"));
}

#[test]
fn test_costs_table() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &["costs"]);
    let p1 = stdout.lines().find(|l| l.starts_with("P1")).unwrap();
    assert!(p1.contains("R$ 1.000,00"));
    assert!(p1.contains("R$ 1.500,00"));
    assert!(p1.contains("50,0%"));
    let p4 = stdout.lines().find(|l| l.starts_with("P4")).unwrap();
    assert!(p4.contains("-100,0%"));
    // P1 appears once even though it has two rows
    assert_eq!(stdout.lines().filter(|l| l.starts_with("P1")).count(), 1);
}

#[test]
fn test_rows_table() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &["rows"]);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("P1")).count(), 2);
    let p2 = stdout.lines().find(|l| l.starts_with("P2")).unwrap();
    assert!(p2.contains("75,5%"));
    assert!(p2.contains("01/02/2025"));
    assert!(p2.contains("15/08/2025"));
    let p4 = stdout.lines().find(|l| l.starts_with("P4")).unwrap();
    assert!(p4.contains("R$ 0,00"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);

    let first = stdout_of(&mut get_cmd(&temp_dir), &["rows", "--json"]);
    let second = stdout_of(&mut get_cmd(&temp_dir), &["rows", "--json"]);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_empty_dataset_shows_empty_state() {
    let (temp_dir, _guard) = setup_test_env("");

    let stdout = stdout_of(&mut get_cmd(&temp_dir), &[]);
    assert!(stdout.contains("Projects:            0 (0 rows)"));
    assert!(stdout.contains("Average completion:  0,0%"));
    assert!(stdout.contains("No project records."));
}

#[test]
fn test_file_flag_overrides_config() {
    let (temp_dir, _guard) = setup_test_env(SAMPLE_ROWS);
    let other = temp_dir.path().join("other.csv");
    std::fs::write(&other, format!("{}Z9,critico,Juridico,10,1,1,,\n", test_env::HEADER)).unwrap();

    let stdout = stdout_of(
        &mut get_cmd(&temp_dir),
        &["status", "--file", other.to_str().unwrap()],
    );
    assert!(stdout.contains("critico"));
    assert!(!stdout.contains("atrasado"));
}
