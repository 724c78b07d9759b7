use anyhow::{bail, Result};
use blnk_api::types::{CreateLedgerRequest, MetaData};
use blnk_api::{Client, ListQuery};
use clap::{Args, Subcommand};

use crate::output::{print_ledgers, OutputFormat};

#[derive(Args)]
pub struct LedgersArgs {
    #[command(subcommand)]
    pub action: LedgerAction,
}

#[derive(Subcommand)]
pub enum LedgerAction {
    /// Fetch one ledger by ID
    Get {
        #[arg(long)]
        id: String,
    },
    /// List ledgers
    List {
        #[arg(long, default_value = "1")]
        page: i64,
        #[arg(long, default_value = "20")]
        per_page: i64,
    },
    /// Create a ledger
    Create {
        #[arg(long)]
        name: String,
        /// Metadata entry as key=value (repeatable)
        #[arg(long = "meta")]
        meta: Vec<String>,
    },
}

/// Parses `key=value` pairs. Values that are valid JSON keep their type.
pub fn parse_meta(entries: &[String]) -> Result<MetaData> {
    let mut meta = MetaData::new();
    for entry in entries {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("metadata entry '{}' must look like key=value", entry);
        };
        if key.is_empty() {
            bail!("metadata entry '{}' has an empty key", entry);
        }
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        meta.insert(key.to_string(), value);
    }
    Ok(meta)
}

pub async fn run(args: &LedgersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        LedgerAction::Get { id } => {
            let ledger = client.ledgers().get(id).await?;
            print_ledgers(&[&ledger], format)
        }
        LedgerAction::List { page, per_page } => {
            let query = ListQuery::default().with_page(*page).with_per_page(*per_page);
            let ledgers = client.ledgers().list(&query).await?;
            eprintln!("Page {} ({} ledgers)", page, ledgers.len());
            let refs: Vec<_> = ledgers.iter().collect();
            print_ledgers(&refs, format)
        }
        LedgerAction::Create { name, meta } => {
            let meta = parse_meta(meta)?;
            let request = CreateLedgerRequest {
                name: name.clone(),
                meta_data: if meta.is_empty() { None } else { Some(meta) },
            };
            let ledger = client.ledgers().create(&request).await?;
            print_ledgers(&[&ledger], format)
        }
    }
}
