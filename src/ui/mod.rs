// UI and formatting module

pub mod monitor_tui;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use prompts::write_warning;
