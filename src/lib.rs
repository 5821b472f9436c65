//! Inn - A small terminal text editor

pub mod buffer;
pub mod color;
pub mod constants;
pub mod editor;
pub mod error;
pub mod input;
pub mod key;
pub mod message;
pub mod render;
pub mod row;
pub mod search;
pub mod syntax;
pub mod term;
pub mod test_utils;
pub mod viewport;
