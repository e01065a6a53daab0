mod meal;

pub use meal::{Meal, DEFAULT_MEAL_NAME};

/// Stable handle to a meal: its position in the pool the menu draws from.
///
/// Menus compare meals by handle, so two pool records with identical fields
/// are still distinct candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MealId(pub usize);

impl MealId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
