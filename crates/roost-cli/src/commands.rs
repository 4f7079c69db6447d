//! Command handlers. Each prints its result as pretty JSON on stdout;
//! logs go to stderr.

use roost_core::{QueryValues, SearchParams};
use roost_listings::{DataSource, ListingsClient};
use serde::Serialize;

use crate::ShortlistAction;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_source(source: DataSource) {
    match source {
        DataSource::Upstream => tracing::debug!("answered by upstream"),
        DataSource::Mock => tracing::info!("answered from mock catalog"),
        DataSource::Fallback(cause) => {
            tracing::warn!(%cause, "upstream unavailable, answered from mock catalog");
        }
    }
}

pub(crate) fn build_params(filters: Vec<(String, String)>) -> SearchParams {
    let query: QueryValues = filters.into_iter().collect();
    SearchParams::from_query(&query)
}

pub(crate) async fn run_search(
    client: &ListingsClient,
    filters: Vec<(String, String)>,
) -> anyhow::Result<()> {
    let params = build_params(filters);
    tracing::debug!(?params, "normalized search");
    let result = client.search_properties_sourced(&params).await;
    report_source(result.source);
    print_json(&result.value)
}

pub(crate) async fn run_property(client: &ListingsClient, id: &str) -> anyhow::Result<()> {
    let property = client.get_property(id).await?;
    print_json(&property)
}

pub(crate) async fn run_cities(client: &ListingsClient) -> anyhow::Result<()> {
    let result = client.get_cities_sourced().await;
    report_source(result.source);
    print_json(&result.value)
}

pub(crate) async fn run_neighborhoods(client: &ListingsClient, city: &str) -> anyhow::Result<()> {
    let result = client.get_neighborhoods_sourced(city).await?;
    report_source(result.source);
    print_json(&result.value)
}

pub(crate) async fn run_top_neighborhoods(
    client: &ListingsClient,
    limit: usize,
    city: Option<&str>,
) -> anyhow::Result<()> {
    let result = client.get_top_neighborhoods_sourced(limit, city).await;
    report_source(result.source);
    print_json(&result.value)
}

pub(crate) async fn run_documents(client: &ListingsClient, asset_type: &str) -> anyhow::Result<()> {
    let result = client.get_required_documents_sourced(asset_type).await;
    report_source(result.source);
    print_json(&result.value)
}

pub(crate) async fn run_shortlist(
    client: &ListingsClient,
    token: &str,
    action: ShortlistAction,
) -> anyhow::Result<()> {
    match action {
        ShortlistAction::List { page, limit } => {
            print_json(&client.list_shortlisted(token, page, limit).await?)
        }
        ShortlistAction::Check { asset_id } => {
            print_json(&client.check_shortlist(&asset_id, token).await?)
        }
        ShortlistAction::Add { asset_id } => {
            print_json(&client.add_to_shortlist(&asset_id, token).await?)
        }
        ShortlistAction::Remove { asset_id } => {
            print_json(&client.remove_from_shortlist(&asset_id, token).await?)
        }
    }
}
