//! Remote table store client (Airtable REST API)
//!
//! Provides:
//! - paginated table fetch into a [`Table`]
//! - project record lookup by name and single-field updates, exposed
//!   through [`ProjectStore`]
//! - bounded retries with exponential backoff for transient failures
//!   (transport errors, HTTP 429 and 5xx) and a per-request timeout

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::assign::ProjectStore;
use crate::error::{HackError, Result};
use crate::table::Table;

/// Base delay before the first retry; doubled on each further attempt
const RETRY_BASE_DELAY_MS: u64 = 250;

/// Resolved connection settings for one run
#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub api_url: String,
    pub base_id: String,
    pub api_key: String,
    pub project_table: String,
    pub judging_table: String,
    pub project_name_field: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub max_pages: usize,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    records: Vec<ApiRecord>,
    #[serde(default)]
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiRecord {
    id: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Outcome of one failed request attempt
#[derive(Debug)]
enum Attempt {
    /// Worth retrying
    Transient(String),
    Fatal(String),
}

pub struct AirtableClient {
    settings: SourceSettings,
    agent: Agent,
    user_agent: String,
}

impl AirtableClient {
    pub fn new(settings: SourceSettings) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_seconds)))
            .http_status_as_error(false)
            .build();
        let agent = Agent::new_with_config(config);
        let user_agent = format!(
            "hackjudge/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        Self {
            settings,
            agent,
            user_agent,
        }
    }

    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.settings.api_url,
            encode_segment(&self.settings.base_id),
            encode_segment(table)
        )
    }

    /// Fetch every row of `table`, following continuation tokens
    pub fn fetch_table(&self, table: &str) -> Result<Table> {
        let url = self.table_url(table);
        info!(table, "fetching remote table");

        let records = collect_pages(self.settings.max_pages, |offset| {
            let query: Vec<(&str, &str)> = offset.map(|o| ("offset", o)).into_iter().collect();
            self.get_json::<ListResponse>(&url, &query, "fetch table")
        })?;

        let fields: Vec<Map<String, Value>> = records.into_iter().map(|r| r.fields).collect();
        debug!(table, rows = fields.len(), "fetch_table");
        Ok(Table::from_field_maps(&fields))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        operation: &str,
    ) -> Result<T> {
        self.with_retry(operation, || {
            let mut request = self
                .agent
                .get(url)
                .header("Authorization", self.bearer())
                .header("User-Agent", self.user_agent.as_str());
            for (key, value) in query {
                request = request.query(*key, *value);
            }
            let response = request
                .call()
                .map_err(|e| Attempt::Transient(format!("transport error: {e}")))?;
            read_json(response)
        })
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.settings.api_key)
    }

    /// Run `attempt` until it succeeds, fails fatally, or retries run out
    fn with_retry<T, F>(&self, operation: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> std::result::Result<T, Attempt>,
    {
        let mut tries = 0u32;
        loop {
            match attempt() {
                Ok(value) => return Ok(value),
                Err(Attempt::Fatal(reason)) => return Err(HackError::source(operation, reason)),
                Err(Attempt::Transient(reason)) if tries >= self.settings.max_retries => {
                    return Err(HackError::source(
                        operation,
                        format!("{reason} (gave up after {} attempts)", tries + 1),
                    ));
                }
                Err(Attempt::Transient(reason)) => {
                    let delay = backoff_delay(tries);
                    warn!(operation, attempt = tries + 1, ?delay, %reason, "transient failure, retrying");
                    thread::sleep(delay);
                    tries += 1;
                }
            }
        }
    }
}

impl ProjectStore for AirtableClient {
    fn find_record_id(&self, project: &str) -> Result<Option<String>> {
        let url = self.table_url(&self.settings.project_table);
        let formula = match_formula(&self.settings.project_name_field, project);
        let query = [("filterByFormula", formula.as_str()), ("maxRecords", "1")];

        let page: ListResponse = self.get_json(&url, &query, "look up project")?;
        Ok(page.records.into_iter().next().map(|r| r.id))
    }

    fn update_field(&self, record_id: &str, field: &str, value: Value) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.table_url(&self.settings.project_table),
            encode_segment(record_id)
        );
        let mut fields = Map::new();
        fields.insert(field.to_string(), value);
        let payload = serde_json::to_string(&serde_json::json!({ "fields": fields }))?;

        self.with_retry("update record", || {
            let response = self
                .agent
                .patch(&url)
                .header("Authorization", self.bearer())
                .header("User-Agent", self.user_agent.as_str())
                .header("Content-Type", "application/json")
                .send(payload.as_bytes())
                .map_err(|e| Attempt::Transient(format!("transport error: {e}")))?;
            read_json::<Value>(response).map(|_| ())
        })
    }
}

/// Drain a paginated listing. Stops when no continuation token is
/// returned; a repeated token or more than `max_pages` pages is an error.
fn collect_pages<F>(max_pages: usize, mut fetch_page: F) -> Result<Vec<ApiRecord>>
where
    F: FnMut(Option<&str>) -> Result<ListResponse>,
{
    let mut records = Vec::new();
    let mut seen_offsets = HashSet::new();
    let mut offset: Option<String> = None;

    for page in 1..=max_pages {
        let response = fetch_page(offset.as_deref())?;
        records.extend(response.records);

        match response.offset {
            None => {
                debug!(pages = page, "pagination_complete");
                return Ok(records);
            }
            Some(next) => {
                if !seen_offsets.insert(next.clone()) {
                    return Err(HackError::source(
                        "fetch table",
                        format!("continuation token '{next}' repeated"),
                    ));
                }
                offset = Some(next);
            }
        }
    }

    Err(HackError::source(
        "fetch table",
        format!("more than {max_pages} pages returned"),
    ))
}

fn read_json<T: DeserializeOwned>(mut response: Response<Body>) -> std::result::Result<T, Attempt> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Attempt::Transient(format!("failed to read response: {e}")))?;

    classify_status(status, &body)?;
    serde_json::from_str(&body).map_err(|e| Attempt::Fatal(format!("malformed response: {e}")))
}

fn classify_status(status: u16, body: &str) -> std::result::Result<(), Attempt> {
    match status {
        200..=299 => Ok(()),
        429 | 500..=599 => Err(Attempt::Transient(format!("HTTP {status}"))),
        _ => {
            let detail: String = body.chars().take(200).collect();
            Err(Attempt::Fatal(format!("HTTP {status}: {detail}")))
        }
    }
}

fn backoff_delay(tries: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_DELAY_MS.saturating_mul(1u64 << tries.min(6)))
}

/// Formula selecting rows whose `field` equals `value`
fn match_formula(field: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{{{field}}} = \"{escaped}\"")
}

/// Percent-encode one URL path segment
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
