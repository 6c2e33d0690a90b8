//! Finna search API request parameters and record conversion.

use serde_json::Value;

use crate::config::SessionConfig;
use crate::error::TransportError;
use crate::state::CatalogItem;
use crate::util::{arrs, s, u64_of};

/// Path of the search endpoint below the API base URL.
pub const SEARCH_ENDPOINT: &str = "/v1/search";

/// Content filters: online records with openly licensed images only.
pub const CONTENT_FILTERS: [&str; 2] = ["online_boolean:\"1\"", "usage_rights_str_mv:usage_E"];

/// Record fields requested from the API.
pub const RECORD_FIELDS: [&str; 11] = [
    "title",
    "imageRights",
    "images",
    "authors",
    "buildings",
    "formats",
    "year",
    "collections",
    "measurements",
    "summary",
    "recordPage",
];

/// Marker in image paths that asks for the original resolution.
const FULLRES_MARKER: &str = "&fullres=1";

/// Edge length of list thumbnails.
const THUMBNAIL_EDGE: u32 = 130;

/// One logical search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query.
    pub query: String,
    /// One-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

impl SearchRequest {
    /// What: Build the query-string pairs for this request.
    ///
    /// Output:
    /// - `lookfor`, `page`, `limit`, every `filter[]` and every `field[]`, in that order.
    ///
    /// Details:
    /// - Repeated keys are emitted once per value, as the API expects.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lookfor", self.query.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        pairs.extend(CONTENT_FILTERS.iter().map(|f| ("filter[]", (*f).to_string())));
        pairs.extend(RECORD_FIELDS.iter().map(|f| ("field[]", (*f).to_string())));
        pairs
    }
}

/// Decoded search response, records still raw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResponse {
    /// Total number of matches.
    pub result_count: u64,
    /// Raw records of the requested page.
    pub records: Vec<Value>,
}

/// What: Decode a search response body.
///
/// Inputs:
/// - `body`: Parsed JSON body.
///
/// Output:
/// - `Ok(SearchResponse)`; a missing `records` list means no records on this page.
///
/// # Errors
/// - `TransportError::Decode` when the body is not an object or reports `status: "ERROR"`.
pub fn parse_search_response(body: &Value) -> Result<SearchResponse, TransportError> {
    if !body.is_object() {
        return Err(TransportError::Decode("response is not a JSON object".into()));
    }
    if s(body, "status").eq_ignore_ascii_case("error") {
        let message = s(body, "statusMessage");
        return Err(TransportError::Decode(if message.is_empty() {
            "API reported an error".into()
        } else {
            message
        }));
    }
    let records = body
        .get("records")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(SearchResponse {
        result_count: u64_of(body, "resultCount").unwrap_or(0),
        records,
    })
}

/// What: First `translated` (or `value`) label of a list of facet objects.
///
/// Inputs:
/// - `record`: Raw record.
/// - `key`: Facet list key such as `buildings` or `formats`.
fn first_translated(record: &Value, key: &str) -> String {
    let Some(first) = record.get(key).and_then(Value::as_array).and_then(|a| a.first()) else {
        return String::new();
    };
    if let Some(text) = first.as_str() {
        return text.to_string();
    }
    let translated = s(first, "translated");
    if translated.is_empty() {
        s(first, "value")
    } else {
        translated
    }
}

/// What: Name of the main author of a record.
///
/// Details:
/// - Accepts `authors.main` as a string, otherwise joins the names under
///   `authors.primary` (an object keyed by name).
fn main_author(record: &Value) -> String {
    let Some(authors) = record.get("authors") else {
        return String::new();
    };
    let main = s(authors, "main");
    if !main.is_empty() {
        return main;
    }
    authors
        .get("primary")
        .and_then(Value::as_object)
        .map(|primary| primary.keys().cloned().collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

/// What: Build the attribution text shown under an image.
///
/// Output:
/// - Author, then the license (with the first rights description when it adds
///   something), then the holding institution, one per line.
fn attribution(record: &Value, organization: &str) -> String {
    let rights = record.get("imageRights").cloned().unwrap_or(Value::Null);
    let copyright = s(&rights, "copyright");
    let mut license = copyright.clone();
    if let Some(description) = arrs(&rights, "description").into_iter().next()
        && description != copyright
    {
        license.push_str(" \u{2013} ");
        license.push_str(&description);
    }
    format!("{}\n{license}\n{organization}", main_author(record))
}

/// What: Convert one raw record into a [`CatalogItem`].
///
/// Inputs:
/// - `record`: Raw record from the search response.
/// - `config`: Session configuration (base URLs and image limits).
///
/// Output:
/// - The flattened item; missing fields become empty values.
///
/// Details:
/// - The image path gets the configured maximum size in place of the full-resolution marker;
///   the thumbnail uses a fixed 130px edge.
#[must_use]
pub fn catalog_item(record: &Value, config: &SessionConfig) -> CatalogItem {
    let image_path = arrs(record, "images").into_iter().next();
    let (image_url, thumbnail_url) = image_path.map_or_else(
        || (String::new(), String::new()),
        |path| {
            let full = format!("{}{path}", config.api_base_url);
            let sized = full.replace(
                FULLRES_MARKER,
                &format!("&w={}&h={}", config.image_max_width, config.image_max_height),
            );
            let thumb = full.replace(
                FULLRES_MARKER,
                &format!("&w={THUMBNAIL_EDGE}&h={THUMBNAIL_EDGE}"),
            );
            (sized, thumb)
        },
    );
    let record_page = s(record, "recordPage");
    let page_url = if record_page.is_empty() {
        String::new()
    } else {
        format!("{}{record_page}", config.site_base_url)
    };
    let organization = first_translated(record, "buildings");
    CatalogItem {
        title: s(record, "title"),
        image_url,
        thumbnail_url,
        page_url,
        attribution: attribution(record, &organization),
        format: first_translated(record, "formats"),
        year: s(record, "year"),
        collections: arrs(record, "collections"),
        measurements: arrs(record, "measurements"),
        summary: arrs(record, "summary").join(" "),
        organization,
    }
}
