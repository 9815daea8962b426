use anyhow::Result;
use clap::{Parser, Subcommand};

/// brightwave - Marketing site
#[derive(Parser)]
#[command(name = "brightwave")]
#[command(about = "Brightwave marketing site and contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = brightwave::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    brightwave::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => brightwave::server::serve(config, host, port).await,
        Commands::Migrate => brightwave::migrate::migrate(&config).await,
        Commands::Reset => brightwave::migrate::reset(&config).await,
    }
}
