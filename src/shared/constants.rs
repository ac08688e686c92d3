/// Collection that receives one record per custom order submission
pub const CUSTOM_ORDER_COLLECTION: &str = "customorder";

/// Maximum number of collection names reported by the diagnostics endpoint
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Maximum number of characters of a store error echoed by diagnostics
pub const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 50;

/// Content type recorded when an uploaded part does not declare one
pub const DEFAULT_UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";
