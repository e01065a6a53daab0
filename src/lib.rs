pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod state;
pub mod telemetry;

pub use error::{MenuError, Result};
pub use menu::{MenuBuilder, MenuStats};
pub use models::{Meal, MealId};
