use clap::Parser;
use launchboard::{cli, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: cli::Cli) -> Result<(), errors::DashboardError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        cli::Commands::Serve(args) => {
            cli::serve::handle_serve(args, cli::load_config(config_path).await?).await
        }
        cli::Commands::Summary(args) => {
            cli::summary::handle_summary(args, cli::load_config(config_path).await?).await
        }
        cli::Commands::Sites(args) => {
            cli::sites::handle_sites(args, cli::load_config(config_path).await?).await
        }
        cli::Commands::Validate(args) => handle_validate(&args).await,
    }
}

async fn handle_validate(args: &cli::commands::ValidateArgs) -> Result<(), errors::DashboardError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = launchboard::config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
