use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use jokewizard::core::config::{self, CliOverrides, JokeWizardConfig};
use jokewizard::tui;

#[derive(Parser)]
#[command(name = "jokewizard", about = "Enter your name, get a joke")]
struct Args {
    /// JokeAPI base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Joke category, e.g. "Any" or "Programming,Pun"
    #[arg(short, long)]
    category: Option<String>,

    /// Only request jokes JokeAPI marks as safe
    #[arg(long)]
    safe_mode: bool,

    /// Where to write the debug log
    #[arg(long, default_value = "jokewizard.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger keeps the terminal clean for the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        JokeWizardConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        category: args.category,
        safe_mode: args.safe_mode,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Joke Wizard starting up: {}/joke/{}",
        resolved.base_url,
        resolved.query.category
    );

    tui::run(resolved)
}
