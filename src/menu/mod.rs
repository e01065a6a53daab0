pub mod builder;
pub mod constants;
pub mod stats;

pub use builder::{MenuBuilder, MenuSlot};
pub use constants::*;
pub use stats::MenuStats;
