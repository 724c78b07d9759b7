use anyhow::Result;
use blnk_api::types::{Document, Ledger, LedgerBalance, Transaction};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct LedgerRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct BalanceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Indicator")]
    #[serde(rename = "Indicator")]
    indicator: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Balance")]
    #[serde(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Inflight")]
    #[serde(rename = "Inflight")]
    inflight: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Reference")]
    #[serde(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Destination")]
    #[serde(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

/// Formats minor units as major units with two decimals, e.g. `125050` at
/// multiplier 100 becomes `1250.50`. Without a multiplier the raw value is shown.
pub fn format_amount(minor: i64, multiplier: f64) -> String {
    if multiplier > 0.0 {
        format!("{:.2}", minor as f64 / multiplier)
    } else {
        minor.to_string()
    }
}

fn format_created(created_at: &chrono::DateTime<chrono::Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

// -- Row builders --

fn build_ledger_rows(ledgers: &[&Ledger]) -> Vec<LedgerRow> {
    ledgers
        .iter()
        .map(|l| LedgerRow {
            id: l.ledger_id.clone(),
            name: l.name.clone(),
            created: format_created(&l.created_at),
        })
        .collect()
}

fn build_balance_rows(balances: &[&LedgerBalance]) -> Vec<BalanceRow> {
    balances
        .iter()
        .map(|b| BalanceRow {
            id: b.balance_id.clone(),
            indicator: b.indicator.clone(),
            currency: b.currency.clone(),
            balance: format_amount(b.balance, b.currency_multiplier),
            inflight: format_amount(b.inflight_balance, b.currency_multiplier),
            created: format_created(&b.created_at),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[&Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.transaction_id.clone(),
            reference: t.reference.clone(),
            source: t.source.clone(),
            destination: t.destination.clone(),
            amount: format!("{:.2} {}", t.amount, t.currency),
            status: t.status.clone(),
            created: format_created(&t.created_at),
        })
        .collect()
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_ledgers(ledgers: &[&Ledger], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&ledgers);
            Ok(())
        }
        _ => print_rows(build_ledger_rows(ledgers), format),
    }
}

pub fn print_balances(balances: &[&LedgerBalance], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&balances);
            Ok(())
        }
        _ => print_rows(build_balance_rows(balances), format),
    }
}

pub fn print_transactions(transactions: &[&Transaction], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&transactions);
            Ok(())
        }
        _ => print_rows(build_transaction_rows(transactions), format),
    }
}

/// Prints resolved search documents. All hits of one search share a type.
pub fn print_documents<'a>(
    documents: impl Iterator<Item = &'a Document>,
    format: &OutputFormat,
) -> Result<()> {
    let mut ledgers = Vec::new();
    let mut balances = Vec::new();
    let mut transactions = Vec::new();
    for doc in documents {
        match doc {
            Document::Ledger(l) => ledgers.push(l),
            Document::Balance(b) => balances.push(b),
            Document::Transaction(t) => transactions.push(t),
        }
    }

    if !ledgers.is_empty() {
        print_ledgers(&ledgers, format)?;
    }
    if !balances.is_empty() {
        print_balances(&balances, format)?;
    }
    if !transactions.is_empty() {
        print_transactions(&transactions, format)?;
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance() -> LedgerBalance {
        serde_json::from_value(serde_json::json!({
            "balance_id": "bln_1",
            "indicator": "@AliceUSD",
            "currency": "USD",
            "balance": 125050,
            "inflight_balance": -500,
            "currency_multiplier": 100,
            "created_at": "2024-03-01T10:15:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_format_amount_with_multiplier() {
        assert_eq!(format_amount(125050, 100.0), "1250.50");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-500, 100.0), "-5.00");
    }

    #[test]
    fn test_format_amount_without_multiplier() {
        assert_eq!(format_amount(42, 0.0), "42");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_build_balance_rows_mapping() {
        let b = balance();
        let rows = build_balance_rows(&[&b]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].indicator, "@AliceUSD");
        assert_eq!(rows[0].balance, "1250.50");
        assert_eq!(rows[0].inflight, "-5.00");
        assert_eq!(rows[0].created, "2024-03-01 10:15:00");
    }

    #[test]
    fn test_build_ledger_rows_mapping() {
        let ledger: Ledger = serde_json::from_value(serde_json::json!({
            "ledger_id": "ldg_1",
            "name": "World Ledger",
            "created_at": "2024-02-20T05:28:03Z"
        }))
        .unwrap();
        let rows = build_ledger_rows(&[&ledger]);
        assert_eq!(rows[0].id, "ldg_1");
        assert_eq!(rows[0].created, "2024-02-20 05:28:03");
    }

    #[test]
    fn test_ledger_table_has_headers() {
        let ledger: Ledger = serde_json::from_value(serde_json::json!({"ledger_id": "ldg_1"})).unwrap();
        let table = Table::new(build_ledger_rows(&[&ledger])).to_string();
        assert!(table.contains("ID"));
        assert!(table.contains("Name"));
        assert!(table.contains("ldg_1"));
    }
}
