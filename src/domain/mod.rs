pub mod allocation;
pub mod common;
pub mod recommendation;
