//! Tool discovery seam and the adapter exposing remote tools as callable units.

pub mod adapter;
pub mod source;

pub use adapter::ToolAdapter;
pub use source::{ToolDescriptor, ToolSource};
