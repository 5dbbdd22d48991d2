use clap::Parser;
use tokio::io::AsyncBufReadExt;
use zipmap::core::FormSurface;
use zipmap::utils::{logger, validation::Validate};
use zipmap::{CliConfig, ConsoleForm, ConsoleMap, FormBinder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zipmap demo form");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let http = reqwest::Client::builder()
        .user_agent(concat!("zipmap/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let form = ConsoleForm::new();
    let binder = FormBinder::new(form.clone(), ConsoleMap::new(), http, &config);
    binder.init_map().await;

    println!("郵便番号を入力してください（7桁、空行で再検索、Ctrl-D で終了）");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            binder.on_submit().await;
        } else {
            form.set_zip_input(line);
            form.set_caret(line.chars().count());
            binder.on_input().await;
        }
    }

    // A geocode scheduled by the last input may still be debouncing; let
    // it land before the process goes away.
    binder.flush_geocode().await;

    Ok(())
}
