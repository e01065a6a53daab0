use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::menu::constants::*;
use crate::models::{Meal, DEFAULT_MEAL_NAME};

/// On-disk shape: `{"meals": [...]}`, or a bare array of meals.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MealDocument {
    Wrapped { meals: Vec<RawMeal> },
    Bare(Vec<RawMeal>),
}

impl MealDocument {
    fn into_meals(self) -> Vec<RawMeal> {
        match self {
            MealDocument::Wrapped { meals } | MealDocument::Bare(meals) => meals,
        }
    }
}

/// A meal as written in the file. Every field is optional and loosely
/// typed; [`RawMeal::into_meal`] applies the fallbacks.
#[derive(Debug, Default, Deserialize)]
struct RawMeal {
    name: Option<Value>,
    link: Option<Value>,
    prep: Option<Value>,
    naughty: Option<Value>,
    cost: Option<Value>,
    heavy: Option<Value>,
    leftovers: Option<Value>,
}

#[derive(Serialize)]
struct MealDocumentRef<'a> {
    meals: &'a [Meal],
}

/// Fallbacks applied while reading a meal:
///
/// | field        | missing       | unparseable   | otherwise            |
/// |--------------|---------------|---------------|----------------------|
/// | rating       | midpoint      | midpoint      | clamped integer      |
/// | leftovers    | false         | false         | `true`/`"true"` only |
/// | name         | "New Meal"    | as text       | verbatim             |
/// | link         | empty         | as text       | verbatim             |
impl RawMeal {
    fn into_meal(self) -> Meal {
        let name = text_or(self.name.as_ref(), DEFAULT_MEAL_NAME);
        let link = text_or(self.link.as_ref(), "");

        Meal::with_ratings(
            name.clone(),
            link,
            rating_or_midpoint(&name, "cost", self.cost.as_ref()),
            rating_or_midpoint(&name, "prep", self.prep.as_ref()),
            rating_or_midpoint(&name, "naughty", self.naughty.as_ref()),
            rating_or_midpoint(&name, "heavy", self.heavy.as_ref()),
            leftovers_flag(self.leftovers.as_ref()),
        )
    }
}

/// Integer rating, or the midpoint when missing or not an integer.
fn rating_or_midpoint(meal: &str, field: &str, value: Option<&Value>) -> i64 {
    let parsed = match value {
        None | Some(Value::Null) => return RATING_MIDPOINT as i64,
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!(meal, field, value = ?value, "unparseable rating, using midpoint");
        RATING_MIDPOINT as i64
    })
}

fn leftovers_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The single record a missing pool file is replaced with.
pub fn seed_meal() -> Meal {
    Meal::with_ratings(
        SEED_MEAL_NAME,
        SEED_MEAL_LINK,
        SEED_MEAL_COST,
        SEED_MEAL_PREP,
        SEED_MEAL_NAUGHTY,
        SEED_MEAL_HEAVY,
        SEED_MEAL_LEFTOVERS,
    )
}

/// Load the meal pool from a JSON file.
///
/// A missing file yields the one-meal seed pool. Malformed JSON and other
/// I/O errors are returned.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "meal file not found, using seed meal");
            return Ok(vec![seed_meal()]);
        }
        Err(e) => return Err(e.into()),
    };

    let document: MealDocument = serde_json::from_str(&content)?;
    let meals: Vec<Meal> = document
        .into_meals()
        .into_iter()
        .map(RawMeal::into_meal)
        .collect();

    tracing::info!(path = %path.display(), count = meals.len(), "loaded meal pool");
    Ok(meals)
}

/// Save the meal pool to a JSON file in the shape `load_meals` reads.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&MealDocumentRef { meals })?;
    fs::write(path, json)?;

    tracing::info!(path = %path.display(), count = meals.len(), "saved meal pool");
    Ok(())
}
