//! Core value types used by the picker session.

use serde::Serialize;

use crate::logic::pagination::PaginationView;

/// One catalog record, flattened into what the picker shows and returns.
///
/// Built from a raw API record by [`crate::sources::search::catalog_item`].
/// Missing fields are empty rather than absent so presentation never has to
/// special-case them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Record title.
    pub title: String,
    /// Direct image locator, sized to the configured maximum dimensions.
    pub image_url: String,
    /// Small preview image locator for result lists.
    pub thumbnail_url: String,
    /// Catalog record page locator.
    pub page_url: String,
    /// Author, license and holding institution on separate lines.
    pub attribution: String,
    /// Holding institution.
    pub organization: String,
    /// Material format (e.g. "Photo").
    pub format: String,
    /// Year of creation as reported by the catalog.
    pub year: String,
    /// Collections the record belongs to.
    pub collections: Vec<String>,
    /// Physical measurements.
    pub measurements: Vec<String>,
    /// Free-text summary.
    pub summary: String,
}

impl CatalogItem {
    /// What: Short form of the summary for list rows.
    ///
    /// Inputs:
    /// - `max`: Maximum number of characters kept before the ellipsis.
    ///
    /// Output:
    /// - The summary, cut to `max` characters with `...` appended when longer.
    #[must_use]
    pub fn summary_preview(&self, max: usize) -> String {
        crate::util::truncate_preview(&self.summary, max)
    }

    /// What: Short form of the collection list for list rows.
    ///
    /// Inputs:
    /// - `max`: Maximum number of characters kept before the ellipsis.
    ///
    /// Output:
    /// - Collections joined with `", "`, cut to `max` characters.
    #[must_use]
    pub fn collections_preview(&self, max: usize) -> String {
        crate::util::truncate_preview(&self.collections.join(", "), max)
    }

    /// What: Turn this item into a pick payload for the given mode.
    ///
    /// Inputs:
    /// - `mode`: Which locator the user chose.
    ///
    /// Output:
    /// - The item with the other locator cleared.
    ///
    /// Details:
    /// - A pick is either "use the image" or "use the link", never both.
    #[must_use]
    pub fn into_pick(mut self, mode: PickMode) -> Self {
        match mode {
            PickMode::UseAsset => self.page_url.clear(),
            PickMode::UseCatalogPage => {
                self.image_url.clear();
                self.thumbnail_url.clear();
            }
        }
        self
    }
}

/// Which locator a pick delivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickMode {
    /// Use the image itself.
    UseAsset,
    /// Use the catalog record page as a material link.
    UseCatalogPage,
}

/// Terminal outcome of a session.
///
/// Serializes to the item object, or to `null` for a cancellation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PickResult {
    /// The user picked an item; exactly one locator is populated.
    Picked(CatalogItem),
    /// Nothing was picked.
    Cancelled,
}

impl PickResult {
    /// Whether this result carries an item.
    #[must_use]
    pub const fn is_picked(&self) -> bool {
        matches!(self, Self::Picked(_))
    }
}

/// Page change requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTarget {
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// An explicit page number; out-of-range values are clamped.
    Number(i64),
}

/// Query text together with the page requested for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchIntent {
    /// Free-text query as entered.
    pub query: String,
    /// One-based page number.
    pub page: u64,
}

impl Default for SearchIntent {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Last accepted search response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPage {
    /// Total number of matches across all pages.
    pub total_count: u64,
    /// One-based page these items belong to.
    pub page: u64,
    /// Items on this page.
    pub items: Vec<CatalogItem>,
}

impl Default for ResultPage {
    fn default() -> Self {
        Self {
            total_count: 0,
            page: 1,
            items: Vec::new(),
        }
    }
}

/// Why the result list is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// No query entered yet, or only whitespace.
    BlankQuery,
    /// The query ran and matched nothing.
    NoMatches,
    /// The request for the current query failed.
    Failed,
}

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Fresh session, nothing sent.
    Idle,
    /// A request is in flight.
    Searching,
    /// Results are shown.
    Populated,
    /// No results to show, with the reason.
    Empty(EmptyReason),
    /// One item is focused.
    Detail,
    /// Result delivered; terminal.
    Closed,
}

/// Snapshot handed to the presenter after every accepted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    /// Current phase.
    pub phase: SessionPhase,
    /// Query the shown (or pending) results belong to.
    pub query: String,
    /// Page number currently requested.
    pub requested_page: u64,
    /// Last accepted result page.
    pub results: ResultPage,
    /// Pagination derived from `results`.
    pub pagination: PaginationView,
    /// Focused item while in [`SessionPhase::Detail`].
    pub focused: Option<CatalogItem>,
    /// Whether "use image" is offered.
    pub allow_image_pick: bool,
    /// Whether "use as material link" is offered.
    pub allow_page_pick: bool,
}

impl SessionView {
    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            title: "Harbour".into(),
            image_url: "https://api.finna.fi/Cover/Show?id=1&w=1200&h=1200".into(),
            thumbnail_url: "https://api.finna.fi/Cover/Show?id=1&w=130&h=130".into(),
            page_url: "https://finna.fi/Record/1".into(),
            collections: vec!["Helsinki City Museum".into(), "Harbours".into()],
            summary: "Steamships at the south harbour in early spring".into(),
            ..Default::default()
        }
    }

    #[test]
    /// What: Picking the asset keeps only the image locators.
    fn into_pick_asset_clears_page_url() {
        let picked = item().into_pick(PickMode::UseAsset);
        assert!(picked.page_url.is_empty());
        assert!(!picked.image_url.is_empty());
    }

    #[test]
    /// What: Picking the catalog page keeps only the page locator.
    fn into_pick_page_clears_image_urls() {
        let picked = item().into_pick(PickMode::UseCatalogPage);
        assert!(picked.image_url.is_empty());
        assert!(picked.thumbnail_url.is_empty());
        assert_eq!(picked.page_url, "https://finna.fi/Record/1");
    }

    #[test]
    /// What: Previews cut long text and join collections.
    fn previews_truncate_with_ellipsis() {
        let it = item();
        assert_eq!(it.summary_preview(9), "Steamship...");
        assert_eq!(it.collections_preview(100), "Helsinki City Museum, Harbours");
        assert_eq!(it.collections_preview(8), "Helsinki...");
    }

    #[test]
    /// What: Cancellation encodes as JSON null, a pick as an object.
    fn pick_result_serializes_untagged() {
        let cancelled = serde_json::to_string(&PickResult::Cancelled).expect("encode");
        assert_eq!(cancelled, "null");
        let picked = serde_json::to_value(PickResult::Picked(item())).expect("encode");
        assert_eq!(picked["title"], "Harbour");
    }
}
