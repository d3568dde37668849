//! Command implementations for the stocks CLI.
//!
//! Reads the same `/admin/api/stocks` endpoint as the dashboard and applies
//! the same filters, so the dashboard's options and filtered records can be
//! checked from a terminal.

use clap::Subcommand;
use stocks_core::DashboardState;

pub mod client;
pub mod output;

#[cfg(test)]
mod test_server;

/// Where and how to reach the backend.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend origin, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Treat an unavailable stock list as empty instead of failing
    pub lenient: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the industry and symbol filter options
    Options {
        /// Narrow the symbol options to this industry
        #[arg(short, long, default_value = "")]
        industry: String,
    },

    /// Print the stocks matching the filters
    List {
        /// Only stocks in this industry
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Only stocks with this symbol
        #[arg(short, long, default_value = "")]
        symbol: String,

        /// Print records as pretty JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(settings: &Settings, command: Command) -> anyhow::Result<()> {
    println!("{}", render(settings, command).await?);
    Ok(())
}

/// Load the stocks and produce the text `command` prints.
pub async fn render(settings: &Settings, command: Command) -> anyhow::Result<String> {
    let mut state = DashboardState::new();
    state.begin_load();
    state.finish_load(Ok(client::load_stocks(settings).await?));

    let text = match command {
        Command::Options { industry } => {
            state.select_industry(industry);
            output::format_options(&state.industries(), &state.symbols())
        }
        Command::List {
            industry,
            symbol,
            json,
        } => {
            state.select_industry(industry);
            state.select_symbol(symbol);
            let filtered = state.filtered();
            if json {
                output::format_json(&filtered)?
            } else {
                output::format_table(&filtered)
            }
        }
    };

    Ok(text)
}
