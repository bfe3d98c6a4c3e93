use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A camera capture as presented to the dashboard.
///
/// Records are built fresh on every listing; nothing is persisted or diffed
/// against a previous call. The `id` is the record's 1-based position within
/// the listing that produced it, so it is only meaningful against that same
/// listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// 1-based position within the listing, as a string handle.
    pub id: String,
    /// The object's storage key, or a synthesized placeholder when the
    /// store omitted one.
    pub filename: String,
    /// Last-modified instant reported by the store; "now" when absent.
    pub timestamp: DateTime<Utc>,
    /// Public address: bucket base URL plus the percent-encoded filename.
    pub url: String,
    /// Human-readable size ("512 B", "2.1 KB", "3.2 MB"), computed once at
    /// normalization and never recomputed.
    pub size: String,
    /// Camera label inferred from the filename's first underscore-delimited
    /// segment; "Unknown" when the filename has no underscore.
    pub source: String,
}
