//! hxa: parse and check hypermedia attribute strings.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use attrs::AttrKind;

mod commands;

#[derive(Parser)]
#[command(name = "hxa")]
#[command(about = "Parse and check hx-trigger, hx-swap and hx-sync attribute values")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a trigger attribute (e.g., "click once, keyup[ctrlKey] delay:500ms")
    #[command(visible_alias = "t")]
    Trigger {
        /// Attribute value
        input: String,

        /// Output format: pretty, json, debug (overrides config)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,
    },

    /// Parse a swap attribute (e.g., "outerHTML swap:200ms scroll:top")
    #[command(visible_alias = "s")]
    Swap {
        /// Attribute value
        input: String,

        /// Output format: pretty, json, debug (overrides config)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,
    },

    /// Parse a sync attribute (e.g., "drop", "queue:last")
    Sync {
        /// Attribute value
        input: String,

        /// Output format: pretty, json, debug (overrides config)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,
    },

    /// Check every attribute listed in a TOML manifest
    #[command(visible_alias = "c")]
    Check {
        /// Manifest file with [[attribute]] entries
        file: String,

        /// Output format: pretty, json, debug (overrides config)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,
    },

    /// Write a default config.toml to HXA_ROOT
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Trigger { input, format } => commands::parse(AttrKind::Trigger, &input, format.as_deref()),
        Commands::Swap { input, format } => commands::parse(AttrKind::Swap, &input, format.as_deref()),
        Commands::Sync { input, format } => commands::parse(AttrKind::Sync, &input, format.as_deref()),
        Commands::Check { file, format } => commands::check(&file, format.as_deref()),
        Commands::Init { force } => commands::init(force),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
