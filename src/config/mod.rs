use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

pub use formsmith_core::settings::EditorSettings;

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        if cli.has_overrides() {
            tracing::debug!("Applying command line overrides");
            settings.apply_cli_overrides(cli);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a config file. A missing file means defaults.
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default(
                "editor.debounce_ms",
                formsmith_core::settings::DEFAULT_DEBOUNCE_MS as i64,
            )?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("FORMSMITH").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(debounce_ms) = cli.debounce_ms {
            self.editor.debounce_ms = debounce_ms;
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_file(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.editor, EditorSettings::default());
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formsmith.toml");
        fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 9000

[editor]
debounce_ms = 120
"#,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.bind_address(), "0.0.0.0:9000");
        assert_eq!(settings.editor.debounce_ms, 120);

        let cli = Cli::parse_from([
            "formsmith",
            "serve",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9100",
            "--debounce-ms",
            "0",
        ]);
        let settings = Settings::new_with_cli(&cli).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.editor.debounce_ms, 0);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formsmith.toml");
        fs::write(&path, "[server]\nhost = \"\"\nport = 0\n").unwrap();

        let err = Settings::from_file(&path).unwrap_err().to_string();
        assert!(err.contains("server.host"));
        assert!(err.contains("server.port"));
    }
}
