/// Data source identifiers
pub const DATA_SOURCE_FEED: &str = "FEED";
pub const DATA_SOURCE_MANUAL: &str = "MANUAL";
