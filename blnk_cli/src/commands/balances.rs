use anyhow::Result;
use blnk_api::{BalanceQuery, Client};
use clap::{Args, Subcommand};

use crate::output::{print_balances, OutputFormat};

#[derive(Args)]
pub struct BalancesArgs {
    #[command(subcommand)]
    pub action: BalanceAction,
}

#[derive(Subcommand)]
pub enum BalanceAction {
    /// Fetch one balance by ID
    Get {
        #[arg(long)]
        id: String,
        /// Include queued transactions in the amounts
        #[arg(long)]
        with_queued: bool,
    },
}

pub async fn run(args: &BalancesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        BalanceAction::Get { id, with_queued } => {
            let query = BalanceQuery {
                with_queued: with_queued.then_some(true),
            };
            let balance = client.balances().get(id, &query).await?;
            print_balances(&[&balance], format)
        }
    }
}
