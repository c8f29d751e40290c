/// Name of the data directory under the user's home directory
pub const DATA_DIR_NAME: &str = ".days";

/// Default events file inside the data directory
pub const DEFAULT_EVENTS_FILE: &str = "events.csv";

/// Header row written to a freshly created events file
pub const EVENTS_HEADER: &str = "date,category,description";

/// Column names looked up in the events file header
pub const DATE_COLUMN: &str = "date";
pub const CATEGORY_COLUMN: &str = "category";
pub const DESCRIPTION_COLUMN: &str = "description";
