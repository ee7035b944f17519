//! Toolbridge CLI binary entry point.

use clap::Parser;
use toolbridge::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let answer = toolbridge::query::handle_query_with_config(&cli.query, &config).await;
    println!("{answer}");
}
