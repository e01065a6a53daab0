use strsim::jaro_winkler;

use crate::models::{Meal, MealId};

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Owned, editable meal pool. Menus borrow its [`meals`](Self::meals).
#[derive(Debug, Clone, Default)]
pub struct MealPool {
    meals: Vec<Meal>,
}

impl MealPool {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// The slice a [`MenuBuilder`](crate::menu::MenuBuilder) draws from.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.meals.get(id.index())
    }

    pub fn get_mut(&mut self, id: MealId) -> Option<&mut Meal> {
        self.meals.get_mut(id.index())
    }

    /// Append a meal and return its handle.
    pub fn add(&mut self, meal: Meal) -> MealId {
        self.meals.push(meal);
        MealId(self.meals.len() - 1)
    }

    /// First meal whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<MealId> {
        let key = name.to_lowercase();
        self.meals.iter().position(|m| m.key() == key).map(MealId)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Meal> {
        let id = self.find(name)?;
        self.meals.get_mut(id.index())
    }

    /// Remove the first meal matching `name`. Handles taken before the
    /// removal are invalidated.
    pub fn remove(&mut self, name: &str) -> Option<Meal> {
        let id = self.find(name)?;
        self.remove_at(id)
    }

    pub fn remove_at(&mut self, id: MealId) -> Option<Meal> {
        (id.index() < self.meals.len()).then(|| self.meals.remove(id.index()))
    }

    /// Meals with names similar to `name`, best match first.
    pub fn suggest(&self, name: &str) -> Vec<MealId> {
        let query = name.to_lowercase();
        let mut candidates: Vec<(MealId, f64)> = self
            .meals
            .iter()
            .enumerate()
            .map(|(i, m)| (MealId(i), jaro_winkler(&m.key(), &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(id, _)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
