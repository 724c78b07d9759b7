use std::path::PathBuf;

use anyhow::Result;
use blnk_api::{Client, FileSource};
use clap::{Args, Subcommand};

use crate::output::print_json;

#[derive(Args)]
pub struct ReconcileArgs {
    #[command(subcommand)]
    pub action: ReconcileAction,
}

#[derive(Subcommand)]
pub enum ReconcileAction {
    /// Upload a statement file (CSV or JSON)
    Upload {
        /// Where the records come from, e.g. the bank or processor name
        #[arg(long)]
        source: String,
        #[arg(long)]
        file: PathBuf,
    },
}

pub async fn run(args: &ReconcileArgs, client: &Client) -> Result<()> {
    match &args.action {
        ReconcileAction::Upload { source, file } => {
            let resp = client
                .reconciliation()
                .upload_external_data(source, FileSource::path(file))
                .await?;
            print_json(&resp);
        }
    }
    Ok(())
}
