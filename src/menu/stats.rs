use crate::models::Meal;

/// Aggregate ratings over a menu.
///
/// Averages are 0.0 for an empty menu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuStats {
    pub count: usize,
    pub average_prep_time: f64,
    pub average_naughtiness: f64,
    pub average_cost: f64,
    pub average_heaviness: f64,
    pub leftovers_count: usize,
}

impl MenuStats {
    /// Compute all aggregates in a single pass.
    pub fn from_meals<'a, I>(meals: I) -> Self
    where
        I: IntoIterator<Item = &'a Meal>,
    {
        let mut count = 0usize;
        let mut prep = 0.0;
        let mut naughty = 0.0;
        let mut cost = 0.0;
        let mut heavy = 0.0;
        let mut leftovers = 0usize;

        for meal in meals {
            count += 1;
            prep += f64::from(meal.prep_time());
            naughty += f64::from(meal.naughtiness());
            cost += f64::from(meal.cost());
            heavy += f64::from(meal.heaviness());
            if meal.produces_leftovers() {
                leftovers += 1;
            }
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        Self {
            count,
            average_prep_time: prep / n,
            average_naughtiness: naughty / n,
            average_cost: cost / n,
            average_heaviness: heavy / n,
            leftovers_count: leftovers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        let stats = MenuStats::from_meals(std::iter::empty());
        assert_eq!(stats, MenuStats::default());
        assert_eq!(stats.average_cost, 0.0);
        assert_eq!(stats.leftovers_count, 0);
    }

    #[test]
    fn test_single_pass_averages() {
        let meals = [
            Meal::with_ratings("A", "", 1, 2, 3, 4, true),
            Meal::with_ratings("B", "", 3, 4, 5, 2, false),
        ];
        let stats = MenuStats::from_meals(&meals);
        assert_eq!(stats.count, 2);
        assert!((stats.average_cost - 2.0).abs() < 1e-9);
        assert!((stats.average_prep_time - 3.0).abs() < 1e-9);
        assert!((stats.average_naughtiness - 4.0).abs() < 1e-9);
        assert!((stats.average_heaviness - 3.0).abs() < 1e-9);
        assert_eq!(stats.leftovers_count, 1);
    }
}
