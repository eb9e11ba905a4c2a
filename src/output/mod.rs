//! Terminal output formatting
//!
//! Rendering of replies, usage text and the greeting lines.

pub mod display;
pub mod formatters;
pub mod greetings;
pub mod help;

pub use display::Renderer;
pub use help::HELP;
