use dialoguer::{Confirm, Input, Select};

use crate::error::{MenuError, Result};
use crate::menu::constants::{rating_name, RATING_MAX, RATING_MIN};
use crate::menu::MenuBuilder;
use crate::models::{Meal, MealId};
use crate::state::MealPool;

/// What the user wants to do with the current menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Reshuffle,
    TogglePin,
    Replace,
    AddMeal,
    Done,
}

impl MenuAction {
    const ALL: [MenuAction; 5] = [
        MenuAction::Reshuffle,
        MenuAction::TogglePin,
        MenuAction::Replace,
        MenuAction::AddMeal,
        MenuAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Reshuffle => "Reshuffle unpinned meals",
            MenuAction::TogglePin => "Pin / unpin a meal",
            MenuAction::Replace => "Replace a meal",
            MenuAction::AddMeal => "Add another meal",
            MenuAction::Done => "Done",
        }
    }
}

/// Prompt for the next menu action.
pub fn prompt_menu_action() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for a menu slot.
pub fn prompt_slot<R>(builder: &MenuBuilder<'_, R>, prompt: &str) -> Result<usize> {
    let options: Vec<String> = builder
        .iter()
        .map(|(i, meal, pinned)| {
            let marker = if pinned { "[pinned] " } else { "" };
            format!("{}. {}{}", i + 1, marker, meal.name())
        })
        .collect();

    if options.is_empty() {
        return Err(MenuError::InvalidInput("Menu is empty".to_string()));
    }

    Ok(Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?)
}

/// Prompt for any meal in the pool.
pub fn prompt_pool_meal(pool: &[Meal]) -> Result<MealId> {
    if pool.is_empty() {
        return Err(MenuError::InvalidInput("Meal pool is empty".to_string()));
    }

    let names: Vec<&str> = pool.iter().map(Meal::name).collect();
    let selection = Select::new()
        .with_prompt("Replace with")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(MealId(selection))
}

/// Prompt for one rating dimension. Out-of-range answers are clamped by the
/// setter they are passed to.
pub fn prompt_rating(meal_name: &str, dimension: &str, current: u8) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "{} for '{}' ({}-{}, now {} = {})",
            dimension,
            meal_name,
            RATING_MIN,
            RATING_MAX,
            current,
            rating_name(current)
        ))
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a typed meal name against the pool.
///
/// Tries an exact (case-insensitive) match first, then offers fuzzy
/// suggestions.
pub fn resolve_meal_name(pool: &MealPool, name: &str) -> Result<MealId> {
    let name = name.trim();
    if let Some(id) = pool.find(name) {
        return Ok(id);
    }

    let suggestions = pool.suggest(name);
    let not_found = || MenuError::MealNotFound(name.to_string());

    match suggestions.as_slice() {
        [] => Err(not_found()),
        [only] => {
            let meal = pool.get(*only).ok_or_else(not_found)?;
            if prompt_yes_no(&format!("Did you mean '{}'?", meal.name()), true)? {
                Ok(*only)
            } else {
                Err(not_found())
            }
        }
        many => {
            let options: Vec<MealId> = many.iter().take(5).copied().collect();
            let mut labels: Vec<String> = options
                .iter()
                .filter_map(|id| pool.get(*id).map(|m| m.name().to_string()))
                .collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            options.get(selection).copied().ok_or_else(not_found)
        }
    }
}
