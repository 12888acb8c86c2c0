use anyhow::Result;
use clap::Parser;
use skyglass::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skyglass::run(cli).await
}
