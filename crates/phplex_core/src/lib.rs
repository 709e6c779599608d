//! phplex_core: Core text types shared by the phplex crates.
//!
//! Provides byte-offset spans and a line map for resolving offsets to
//! 1-based line/column positions.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
