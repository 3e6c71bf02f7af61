//! AvtoRend - terminal storefront for a car-rental fleet
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use avtorend::core::prelude::*;
use avtorend::LaunchOptions;
use clap::Parser;

/// AvtoRend - browse the rental fleet from the terminal
#[derive(Parser, Debug)]
#[command(name = "avtorend")]
#[command(about = "Terminal storefront for the AvtoRend car-rental fleet", long_about = None)]
struct Args {
    /// Directory holding `.avtorend/` (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Rental API base URL, overrides `api.base_url`
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Interface language (e.g. `ru`, `en`)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Write a default `.avtorend/config.toml` and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        avtorend::app::config::init_config_dir(&project_path)?;
        eprintln!(
            "✅ Config at {}",
            avtorend::app::config::config_path(&project_path).display()
        );
        return Ok(());
    }

    if let Some(url) = &args.api_url {
        if let Err(e) = avtorend::api::parse_base_url(url) {
            eprintln!("❌ Invalid --api-url: {}", e);
            std::process::exit(2);
        }
    }

    avtorend::run_with_project(
        &project_path,
        LaunchOptions {
            api_url: args.api_url,
            language: args.lang,
        },
    )
    .await
}
