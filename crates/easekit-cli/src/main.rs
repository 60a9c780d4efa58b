use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easekit_core::{AppConfig, EasingRegistry, Rgb, Value};

mod commands;

#[derive(Parser)]
#[command(name = "easekit")]
#[command(author, version, about = "Easing curves and animation sampler for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit a trace record for every easing evaluation
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered easing
    List,
    /// Print input/output pairs of an easing
    Sample {
        /// Registry key, e.g. quad-in or penner-bounce-out
        easing: String,
        /// Number of intervals between 0 and 1
        #[arg(short = 'n', long, default_value_t = 10)]
        steps: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Draw an easing curve in the terminal
    Plot {
        /// Registry key
        easing: String,
        #[arg(long, default_value_t = 60)]
        width: usize,
        #[arg(long, default_value_t = 20)]
        height: usize,
    },
    /// Play an animation between two values
    Animate {
        /// Start value, comma-separated for several dimensions
        #[arg(long, allow_hyphen_values = true)]
        from: Value,
        /// End value, same dimensions as --from
        #[arg(long, allow_hyphen_values = true)]
        to: Value,
        /// Duration in milliseconds
        #[arg(short = 'd', long)]
        duration: Option<u64>,
        /// Registry key of the easing
        #[arg(short = 'e', long)]
        easing: Option<String>,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Fade between two colors (#rrggbb or rgb(r, g, b))
    Fade {
        #[arg(long)]
        from: Rgb,
        #[arg(long)]
        to: Rgb,
        #[arg(short = 'd', long)]
        duration: Option<u64>,
        #[arg(short = 'e', long)]
        easing: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if cli.trace {
        config.diagnostics.trace = true;
    }

    // Initialize logging; stdout is reserved for command output
    let default_level = if config.diagnostics.trace {
        "trace".to_string()
    } else {
        config.general.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(default_level),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    // Built once and handed to every command
    let registry = EasingRegistry::standard();

    match cli.command {
        Commands::List => commands::list::run(&registry),
        Commands::Sample { easing, steps, json } => {
            commands::sample::run(&registry, &config, &easing, steps, json)
        }
        Commands::Plot {
            easing,
            width,
            height,
        } => commands::plot::run(&registry, &config, &easing, width, height),
        Commands::Animate {
            from,
            to,
            duration,
            easing,
            json,
        } => {
            let easing = easing.as_deref();
            commands::animate::run(&registry, &config, from, to, duration, easing, json).await
        }
        Commands::Fade {
            from,
            to,
            duration,
            easing,
        } => commands::fade::run(&registry, &config, from, to, duration, easing.as_deref()).await,
    }
}
