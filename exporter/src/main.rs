use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_upload_export::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // a missing .env is fine; the environment may already carry everything
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "loaded configuration");

    let http = reqwest::Client::builder()
        .build()
        .context("build HTTP client")?;
    let today = jiff::Zoned::now().date();

    let path = youtube_upload_export::run(&config, http, today)
        .await
        .with_context(|| format!("export uploads of channel {:?}", config.channel_handle))?;

    println!("{}", path.display());
    Ok(())
}
