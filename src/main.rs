use clap::Parser;
use formsmith::cli::{Cli, Command};
use formsmith::config::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; also picks up `log` records from formsmith-core
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    match cli.command {
        Command::Serve => {
            info!("Starting Formsmith on {}", settings.bind_address());
            formsmith::serve(settings).await
        }
        Command::Check(args) => {
            let passed = tokio::task::spawn_blocking(move || {
                formsmith::check::run(&args, &settings)
            })
            .await??;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
