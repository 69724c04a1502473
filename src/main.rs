use clap::Parser;
use prediction_board::cli::{Cli, Commands};
use prediction_board::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    prediction_board::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Table(args) => {
            tracing::debug!("Running table command");
            args.execute(&config).await?;
        }
        Commands::Chart(args) => {
            tracing::debug!("Running chart command");
            args.execute(&config).await?;
        }
        Commands::Symbols(args) => {
            tracing::debug!("Running symbols command");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Feed: {}", config.feed.url);
            match config.feed.timeout_secs {
                Some(secs) => println!("  Timeout: {}s", secs),
                None => println!("  Timeout: none"),
            }
            println!("  Classifier: {:?}", config.classifier);
            println!(
                "  View: page_size={}, window={}, chart_max_points={}, currency={:?}",
                config.view.page_size,
                config.view.default_window,
                config.view.chart_max_points,
                config.view.chart_currency
            );
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
