use bigbrain::core::config;
use bigbrain::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "bigbrain", about = "Terminal console for the BigBrain quiz platform")]
struct Args {
    /// Backend base URL (overrides config and BIGBRAIN_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Admin bearer token (overrides config and BIGBRAIN_TOKEN)
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to bigbrain.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("bigbrain.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.base_url.as_deref(),
        args.token.as_deref(),
    );

    log::info!("BigBrain console starting against {}", resolved.base_url);

    tui::run(resolved)
}
