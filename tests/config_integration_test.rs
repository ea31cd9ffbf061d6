use anyhow::Result;
use quantum_depot::{run_console, CliConfig, QuantumObject, Session, StatusFormat};
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_session_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("depot.toml");
    std::fs::write(
        &config_path,
        r#"
[factory]
id_prefix = "LAB-"
min_stability = 80.0
max_stability = 80.0
seed = 11

[display]
format = "text"
"#,
    )?;

    let cli = CliConfig {
        config: Some(config_path.to_str().unwrap().to_string()),
        seed: None,
        format: None,
        verbose: false,
    };
    let config = cli.resolve()?;
    let mut session = Session::from_config(&config)?;

    let mut output = Vec::new();
    run_console(&mut session, Cursor::new("1\n1\n5\n"), &mut output)?;

    assert_eq!(session.inventory().len(), 2);
    for object in session.inventory().list_all() {
        assert!(object.id().starts_with("LAB-"));
        assert_eq!(object.stability().value(), 80.0);
    }
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[factory]\nmin_stability = 150.0\n")?;

    let cli = CliConfig {
        config: Some(config_path.to_str().unwrap().to_string()),
        seed: None,
        format: Some(StatusFormat::Json),
        verbose: false,
    };
    assert!(cli.resolve().is_err());
    Ok(())
}

#[test]
fn test_seeded_configs_reproduce_inventory() -> Result<()> {
    let cli = CliConfig {
        config: None,
        seed: Some(31337),
        format: None,
        verbose: false,
    };

    let mut first = Session::from_config(&cli.resolve()?)?;
    let mut second = Session::from_config(&cli.resolve()?)?;
    run_console(&mut first, Cursor::new("1\n1\n1\n5\n"), &mut std::io::sink())?;
    run_console(&mut second, Cursor::new("1\n1\n1\n5\n"), &mut std::io::sink())?;

    let snapshots = |s: &Session| {
        s.inventory()
            .list_all()
            .map(|o| o.snapshot())
            .collect::<Vec<_>>()
    };
    assert_eq!(snapshots(&first), snapshots(&second));
    Ok(())
}
