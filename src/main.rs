use anyhow::Result;
use clap::Parser;
use weather_tile::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_tile::logging::init()?;
    weather_tile::run(cli).await
}
