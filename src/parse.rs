use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Config, Error, Result, BODY_SNIPPET_LEN};

/// One decoded catalog response.
/// Entries stay raw JSON since the image key is only known at runtime.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub paging: Paging,
    #[serde(default)]
    pub results: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Paging {
    #[serde(rename = "pageCount", default)]
    pub page_count: Option<u32>,
}

impl CatalogPage {
    /// Total number of pages, `None` if it's missing or zero.
    pub fn page_count(&self) -> Option<u32> {
        self.paging.page_count.filter(|&n| n > 0)
    }
}

/// A single downloadable image extracted from a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub index: String,
    pub name: String,
    pub image_url: String,
}

/// Decodes a page body, keeping the start of it around in the error for diagnostics.
pub(crate) fn parse_page(body: &str, page: u32) -> Result<CatalogPage> {
    serde_json::from_str(body).map_err(|source| Error::Decode {
        page,
        source,
        snippet: body_snippet(body),
    })
}

/// Extracts records from the entries of a page, in order.
/// Entries without all three required fields are dropped.
pub fn extract_records(page: &CatalogPage, config: &Config) -> Vec<Record> {
    page.results
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| extract_record(entry, config))
        .collect()
}

fn extract_record(entry: &Map<String, Value>, config: &Config) -> Option<Record> {
    let image_url = non_empty_str(entry.get(&config.image_key)?)?;
    let name = non_empty_str(entry.get(&config.name_key)?)?;
    let index = match entry.get(&config.index_key)? {
        Value::Number(n) => n.to_string(),
        other => non_empty_str(other)?.to_string(),
    };

    Some(Record {
        index,
        name: name.to_string(),
        image_url: image_url.to_string(),
    })
}

#[inline]
fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn body_snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}
