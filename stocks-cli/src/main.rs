//! Stocks CLI - inspect the data behind the user stock dashboard.

use clap::Parser;
use stocks_cmd::Settings;

#[derive(Parser)]
#[command(
    name = "stocks-cli",
    version,
    about = "Query the stock listing used by the user dashboard"
)]
struct Cli {
    /// Backend origin serving /admin/api/stocks
    #[arg(long, global = true, env = "STOCKS_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Treat an unavailable stock list as empty, like the dashboard does
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: stocks_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using backend {}", cli.base_url);
    let settings = Settings {
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
        lenient: cli.lenient,
    };
    stocks_cmd::run(&settings, cli.command).await
}
