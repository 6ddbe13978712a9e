//! Paginated award API client.
//!
//! The agency exposes a single search endpoint taking a boolean-OR query
//! expression and an offset/limit pagination window, answering with a page
//! envelope carrying the total match count. [`fetch_all`] walks the pages
//! sequentially until the full result set has been accumulated. There is no
//! retry policy: a transport failure aborts the run and the caller re-invokes
//! the whole pipeline.
//!
//! The HTTP collaborator hides behind [`AwardPageSource`] so the pipeline can
//! be exercised in tests without a network.

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Congressional district as the agency supplies it: sometimes a number,
/// sometimes an already-rendered string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDistrict {
    Number(u32),
    Text(String),
}

/// One funded award. The jurisdiction and cost fields are typed; every other
/// agency-supplied field is captured opaquely and passed through to the
/// report unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardRecord {
    #[serde(default)]
    pub org_state: Option<String>,

    #[serde(default)]
    pub cong_district: Option<RawDistrict>,

    #[serde(default)]
    pub total_cost: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
    pub items: Vec<AwardRecord>,
}

/// Renders the agency's search syntax: values within a dimension are
/// comma-joined (boolean OR), dimensions are joined by `$`.
pub fn build_query(config: &ReportConfig) -> String {
    let fiscal_years: Vec<String> = config
        .fiscal_years
        .iter()
        .map(|fy| fy.to_string())
        .collect();
    format!(
        "agency:{}$orgState:{}$fy:{}",
        config.agency,
        config.org_states.join(","),
        fiscal_years.join(",")
    )
}

/// Source of award result pages.
#[async_trait]
pub trait AwardPageSource {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<SearchPage>;
}

/// `reqwest`-backed page source against the real agency endpoint.
pub struct ReporterClient {
    client: Client,
    base_url: String,
}

impl ReporterClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AwardPageSource for ReporterClient {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<SearchPage> {
        debug!("Requesting awards at offset {} (limit {})", offset, limit);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", query)])
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Award search failed with status: {}",
                response.status()
            )));
        }

        let page: SearchPage = response.json().await?;
        Ok(page)
    }
}

/// Fetch every record matching `query`, one page at a time, in order.
pub async fn fetch_all<S>(source: &S, query: &str, page_size: usize) -> Result<Vec<AwardRecord>>
where
    S: AwardPageSource + Sync + ?Sized,
{
    let mut records: Vec<AwardRecord> = Vec::new();
    loop {
        let offset = records.len();
        let page = source.fetch_page(query, offset, page_size).await?;

        // An empty page before the reported total is reached would loop
        // forever; surface it as a malformed response instead.
        if page.items.is_empty() && offset < page.total_count {
            return Err(Error::MalformedRecord {
                offset,
                detail: "empty page before the reported total was reached".to_string(),
            });
        }

        validate_items(&page.items, offset)?;

        let total = page.total_count;
        records.extend(page.items);
        if records.len() >= total {
            break;
        }
    }

    info!("Fetched {} award records", records.len());
    Ok(records)
}

/// Required fields must be present on every record. A missing congressional
/// district is not an error here; those records are dropped (and counted) at
/// the join.
fn validate_items(items: &[AwardRecord], page_offset: usize) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        let missing = if item.org_state.as_deref().unwrap_or("").is_empty() {
            Some("org_state")
        } else if item.total_cost.is_none() {
            Some("total_cost")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(Error::MalformedRecord {
                offset: page_offset + index,
                detail: format!("missing required field `{field}`"),
            });
        }
    }
    Ok(())
}
