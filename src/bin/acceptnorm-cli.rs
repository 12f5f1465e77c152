use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use acceptnorm::config::loader::load_config;
use acceptnorm::config::schema::AcceptNormConfig;
use acceptnorm::observability::logging::init_logging;
use acceptnorm::Negotiator;

#[derive(Parser)]
#[command(name = "acceptnorm-cli")]
#[command(about = "Inspect and normalize Accept headers", long_about = None)]
struct Cli {
    /// Optional TOML config file (entry capacity, log level).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, sort and re-render a header in canonical form
    Canonicalize { header: String },
    /// Restrict a header to the preferred types the client accepts
    Filter { header: String, preferred: String },
    /// Pick the single preferred type the client likes best
    BestMatch { header: String, preferred: String },
    /// First preferred type the client accepts, or the header unchanged
    Prefer { header: String, preferred: String },
    /// Quality the client assigns to a media type
    Quality { header: String, media_type: String },
    /// Whether the client accepts a media type at all
    Accepts { header: String, media_type: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AcceptNormConfig::default(),
    };
    init_logging(&config.observability.log_level);

    let mut negotiator = Negotiator::from_config(&config);

    let (operation, result) = match &cli.command {
        Commands::Canonicalize { header } => {
            ("canonicalize", json!(negotiator.canonicalize(header)))
        }
        Commands::Filter { header, preferred } => {
            ("filter", json!(negotiator.filter(header, preferred)))
        }
        Commands::BestMatch { header, preferred } => {
            ("best_match", json!(negotiator.best_match(header, preferred)))
        }
        Commands::Prefer { header, preferred } => {
            ("prefer", json!(negotiator.prefer(header, preferred)))
        }
        Commands::Quality { header, media_type } => {
            ("quality", json!(negotiator.quality(header, media_type)))
        }
        Commands::Accepts { header, media_type } => {
            ("accepts", json!(negotiator.accepts(header, media_type)))
        }
    };

    if cli.json {
        let out = json!({ "operation": operation, "result": result });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match result {
            serde_json::Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }

    Ok(())
}
