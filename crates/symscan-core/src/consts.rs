/// Smallest zoom factor the viewer allows.
pub const MIN_SCALE: f32 = 0.5;

/// Largest zoom factor the viewer allows.
pub const MAX_SCALE: f32 = 5.0;

/// Scale change applied by a single zoom-in / zoom-out button press.
pub const ZOOM_STEP: f32 = 0.25;

/// Scale change applied by one wheel notch while fullscreen.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Scale applied when the fullscreen lightbox opens.
pub const FULLSCREEN_SCALE: f32 = 2.0;

/// Default scale outside of any zoom interaction.
pub const DEFAULT_SCALE: f32 = 1.0;

/// File extensions accepted by the upload endpoint (lowercase, no dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf", "dwf", "dwfx", "dwg", "dxf"];

/// Class label used when the backend omits one.
pub const UNKNOWN_CLASS: &str = "Unknown";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the configured service base URL.
pub const BASE_URL_ENV: &str = "SYMSCAN_BACKEND_URL";

/// Per-request timeout. Inference over a multi-page drawing can take minutes.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "detection_summary.csv";

/// Multipart field name the upload endpoint expects.
pub const UPLOAD_FIELD: &str = "file";
