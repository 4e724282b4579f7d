use anyhow::Result;
use clap::Parser;
use tagdesk::cli::Cli;
use tagdesk::config::Config;
use tagdesk::logger::{self, Logger};
use tagdesk::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(&path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::new();
    if let Some(log_path) = logger::setup_file_logging(&config.logging)? {
        logger.log(format!("File logging enabled at {}", log_path.display()));
    }

    ui::run_app(config, logger).await
}
