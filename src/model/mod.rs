pub mod bucket;
pub mod items;
pub mod modifiers;

pub use bucket::*;
pub use items::*;
pub use modifiers::*;
