use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Formsmith - build forms from a JSON schema with a live preview
#[derive(Parser, Debug, Clone)]
#[command(name = "formsmith", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMSMITH_CONFIG", default_value = "formsmith.toml", global = true)]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMSMITH_HOST", global = true)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMSMITH_PORT", global = true)]
    pub port: Option<u16>,

    /// Preview debounce in milliseconds (0 disables debouncing)
    #[arg(long, env = "FORMSMITH_DEBOUNCE_MS", global = true)]
    pub debounce_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the form builder UI
    Serve,
    /// Validate a schema file and render its form outline
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Schema file to check
    pub file: PathBuf,

    /// Enter a value and submit the form, e.g. `--fill email=ada@example.com`
    #[arg(long = "fill", value_name = "ID=VALUE", value_parser = parse_fill)]
    pub fills: Vec<(String, String)>,

    /// Re-run the check whenever the file changes
    #[arg(short, long)]
    pub watch: bool,
}

fn parse_fill(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, value)) if !id.is_empty() => Ok((id.to_string(), value.to_string())),
        _ => Err(format!("expected ID=VALUE, got '{}'", raw)),
    }
}

impl Cli {
    /// Check if any setting is overridden on the command line or via environment
    pub fn has_overrides(&self) -> bool {
        self.host.is_some() || self.port.is_some() || self.debounce_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formsmith", "serve"]);
        assert_eq!(cli.config, PathBuf::from("formsmith.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.has_overrides());
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formsmith",
            "serve",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--debounce-ms",
            "0",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.debounce_ms, Some(0));
        assert!(cli.has_overrides());
    }

    #[test]
    fn test_check_fills() {
        let cli = Cli::parse_from([
            "formsmith",
            "check",
            "survey.json",
            "--fill",
            "name=Ada",
            "--fill",
            "note=a=b",
            "-w",
        ]);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.file, PathBuf::from("survey.json"));
        assert!(args.watch);
        assert_eq!(
            args.fills,
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("note".to_string(), "a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_bad_fill_is_rejected() {
        assert!(Cli::try_parse_from(["formsmith", "check", "f.json", "--fill", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["formsmith", "check", "f.json", "--fill", "=x"]).is_err());
    }
}
