use anyhow::Result;
use clap::Parser;
use embedcell_cli::{Cli, build_handler, run};
use embedcell_embeddings::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config(ClientConfig::from_env());
    let api_key = std::env::var("OPENAI_API_KEY").ok();
    let handler = build_handler(config, api_key)?;

    let output = run(&handler, cli.command).await?;
    println!("{output}");
    Ok(())
}
