// Core tailing logic module

pub mod config;
pub mod registry;
pub mod tail;

// Re-export commonly used items
pub use config::{load_config, parse_config, COMMENT_CHAR};
pub use registry::{ChangeState, FileRegistry, MonitoredFile, SkippedFile};
pub use tail::{extract_detail_view, extract_last_line, TailLimits};
