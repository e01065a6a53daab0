mod persistence;
mod pool;

pub use persistence::{load_meals, save_meals, seed_meal};
pub use pool::{MealPool, SUGGESTION_THRESHOLD};
