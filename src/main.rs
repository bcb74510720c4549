use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use datagalaxy_toolbox::api::HttpConnector;
use datagalaxy_toolbox::cli::{Cli, commands};
use datagalaxy_toolbox::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load()?;

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // Log to file (truncate on each run) when one is configured
    if let Some(path) = cli.log_file.as_ref().or(config.settings.log_file.as_ref()) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {:?}", path))?;
        logger.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    logger.init();

    info!("Starting datagalaxy-toolbox");
    config.log_source();

    let connector = HttpConnector::new(config.client_config(cli.timeout));
    commands::run(cli.command, &connector).await
}
