pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::SixDegreesApp;
pub use args::Args;
pub use utils::format_number;
