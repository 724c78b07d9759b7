use anyhow::Result;
use blnk_api::types::ResourceType;
use blnk_api::{Client, SearchParams};
use clap::Args;

use crate::output::{print_documents, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Collection to search: ledgers, balances, transactions
    #[arg(long, default_value = "ledgers")]
    pub resource: String,

    /// Query text (`*` matches everything)
    #[arg(long, short)]
    pub q: String,

    /// Fields to match the query against (comma-separated)
    #[arg(long)]
    pub query_by: Option<String>,

    /// Filter expression, e.g. "name:World" or "balance:>1"
    #[arg(long)]
    pub filter_by: Option<String>,

    /// Sort expression, e.g. "created_at:desc"
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub per_page: i64,
}

pub fn build_params(args: &SearchArgs) -> SearchParams {
    let mut params = SearchParams::new(&args.q)
        .with_page(args.page)
        .with_per_page(args.per_page);
    if let Some(query_by) = &args.query_by {
        params = params.with_query_by(query_by);
    }
    if let Some(filter_by) = &args.filter_by {
        params = params.with_filter_by(filter_by);
    }
    if let Some(sort_by) = &args.sort_by {
        params = params.with_sort_by(sort_by);
    }
    params
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resource: ResourceType = args.resource.parse()?;
    let params = build_params(args);

    let resp = client.search().search_document(&params, resource).await?;

    eprintln!(
        "Found {} {} (page {}/{}, {} ms)",
        resp.found,
        resource,
        resp.page,
        resp.total_pages(args.per_page),
        resp.search_time_ms
    );

    print_documents(resp.documents(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            resource: "balances".to_string(),
            q: "*".to_string(),
            query_by: None,
            filter_by: Some("balance:>1".to_string()),
            sort_by: None,
            page: 2,
            per_page: 10,
        }
    }

    #[test]
    fn params_carry_only_given_filters() {
        let params = build_params(&args());
        assert_eq!(params.q, "*");
        assert_eq!(params.filter_by.as_deref(), Some("balance:>1"));
        assert!(params.sort_by.is_none());
        assert_eq!(params.page, Some(2));
    }
}
