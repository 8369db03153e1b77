use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tidings::{util, App, Config};

#[derive(Parser)]
#[command(
    name = "tidings",
    about = "Compose and share a holiday greeting card from your terminal"
)]
struct Cli {
    /// A shared card URL (or bare `d` token) to open
    link: Option<String>,

    /// Override the data directory (default ~/.tidings)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.tidings/logs/tidings.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = Config::load();

    let mut app = App::new(config);
    if let Some(link) = cli.link {
        app.open_shared_link(&link);
    }
    app.run().await
}
