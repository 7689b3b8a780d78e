use formsmith::check::{check_file, FillOutcome};
use formsmith_core::sample::INITIAL_SCHEMA;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_check_file_outline_and_submit() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("survey.json");
    fs::write(&path, INITIAL_SCHEMA)?;

    let report = check_file(&path, &[])?;
    assert!(report.passed());
    assert!(report.to_string().contains("Controls (3):"));

    let fills = vec![
        ("name".to_string(), "Ada".to_string()),
        ("email".to_string(), "ada@example.com".to_string()),
        ("companySize".to_string(), "51-200".to_string()),
    ];
    let report = check_file(&path, &fills)?;
    match report.outcome {
        Some(FillOutcome::Submitted(submission)) => {
            assert_eq!(submission.get("companySize"), Some("51-200"));
        }
        other => panic!("expected submission, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_check_file_edit_to_invalid_and_back() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("survey.json");

    fs::write(&path, INITIAL_SCHEMA.replace("\"fields\": [", "\"fields\": [,"))?;
    assert!(!check_file(&path, &[])?.passed());

    fs::write(&path, INITIAL_SCHEMA)?;
    assert!(check_file(&path, &[])?.passed());
    Ok(())
}

#[test]
fn test_check_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = check_file(&temp_dir.path().join("nope.json"), &[]).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
