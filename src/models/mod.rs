//! 数据模型层

pub mod history;
pub mod position;

pub use history::History;
pub use position::{chars_in_utf16_prefix, utf16_len, utf16_offset_to_byte, SemanticPosition};
