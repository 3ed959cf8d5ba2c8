//! Canonical column names shared by ingestion, matching, and aggregation.

/// Join-key column in upload rows (pre-hashed hex).
pub const KEY: &str = "key";

/// Side A (advertiser) columns.
pub const CLICKED: &str = "clicked";
pub const CAMPAIGN_ID: &str = "campaign_id";
pub const REGION: &str = "region";

/// Side B (retailer) columns.
pub const PURCHASED: &str = "purchased";
pub const PURCHASE_VALUE: &str = "purchase_value";

/// Columns that count as raw identifiers: any projection naming one of
/// these is a privacy violation. Upload rows may carry them; ingestion
/// drops them before storage.
pub const RAW_IDENTIFIERS: &[&str] = &[KEY, "email", "email_hashed", "user_id"];

/// Columns a grouped aggregate may legally partition by.
pub const GROUPABLE: &[&str] = &[REGION, CAMPAIGN_ID];

/// True if `name` refers to a raw identifier column (case-insensitive).
pub fn is_raw_identifier(name: &str) -> bool {
    RAW_IDENTIFIERS.iter().any(|f| f.eq_ignore_ascii_case(name))
}

/// True if `name` is a legal grouping column (case-insensitive).
pub fn is_groupable(name: &str) -> bool {
    GROUPABLE.iter().any(|f| f.eq_ignore_ascii_case(name))
}
