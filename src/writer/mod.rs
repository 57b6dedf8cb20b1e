pub mod json;
pub mod tier_map;

pub use json::*;
pub use tier_map::*;
