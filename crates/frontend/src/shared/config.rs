/// Port the console API listens on, on the same host that serves the console
pub const API_PORT: u16 = 3000;

/// Page size of regular paginated lists (alerts)
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Page size of card lists (detections)
pub const DEFAULT_SMALL_PAGE_SIZE: u32 = 10;

/// How long a snackbar stays on screen
pub const SNACKBAR_LIFETIME_MS: u32 = 6_000;

/// Snackbars shown at once; older ones are dropped
pub const SNACKBAR_MAX_VISIBLE: usize = 4;

/// Debounce for free-text filters before they are written to the URL
pub const FILTER_DEBOUNCE_MS: u32 = 300;
