use anyhow::Result;
use blnk_api::types::InflightStatus;
use blnk_api::Client;
use clap::{Args, Subcommand};

use crate::output::{print_transactions, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    #[command(subcommand)]
    pub action: TransactionAction,
}

#[derive(Subcommand)]
pub enum TransactionAction {
    /// Fetch one transaction by ID
    Get {
        #[arg(long)]
        id: String,
    },
    /// Commit an inflight transaction, fully or partially
    Commit {
        #[arg(long)]
        id: String,
        /// Amount to commit; omit to commit everything
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Void an inflight transaction
    Void {
        #[arg(long)]
        id: String,
    },
    /// Refund an applied transaction
    Refund {
        #[arg(long)]
        id: String,
    },
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let transactions = client.transactions();
    let txn = match &args.action {
        TransactionAction::Get { id } => transactions.get(id).await?,
        TransactionAction::Commit { id, amount } => {
            transactions
                .update_inflight(id, InflightStatus::Commit, *amount)
                .await?
        }
        TransactionAction::Void { id } => {
            transactions
                .update_inflight(id, InflightStatus::Void, None)
                .await?
        }
        TransactionAction::Refund { id } => transactions.refund(id).await?,
    };
    print_transactions(&[&txn], format)
}
