mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use blnk_api::{Client, ClientOptions};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

const DEFAULT_BASE_URL: &str = "http://localhost:5001/";

#[derive(Parser)]
#[command(name = "blnk")]
#[command(about = "Query and post to a Blnk ledger from the command line")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Ledger API base URL
    #[arg(long, env = "BLNK_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// API key sent as X-Blnk-Key
    #[arg(long, env = "BLNK_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Attempts per request on network or 5xx failures
    #[arg(long, default_value = "3", global = true)]
    retries: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search ledgers, balances, or transactions
    Search(commands::search::SearchArgs),
    /// Create, fetch, or list ledgers
    Ledgers(commands::ledgers::LedgersArgs),
    /// Fetch balances
    Balances(commands::balances::BalancesArgs),
    /// Fetch, settle, or refund transactions
    Transactions(commands::transactions::TransactionsArgs),
    /// Upload external records for reconciliation
    Reconcile(commands::reconcile::ReconcileArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blnk=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let options = ClientOptions::default()
        .with_retry_count(cli.retries)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = Client::with_options(&cli.base_url, cli.api_key.clone(), options)?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Ledgers(args) => commands::ledgers::run(args, &client, &format).await?,
        Commands::Balances(args) => commands::balances::run(args, &client, &format).await?,
        Commands::Transactions(args) => {
            commands::transactions::run(args, &client, &format).await?
        }
        Commands::Reconcile(args) => commands::reconcile::run(args, &client).await?,
    }

    Ok(())
}
