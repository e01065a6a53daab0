/// Lowest value any rating can hold.
pub const RATING_MIN: u8 = 1;

/// Highest value any rating can hold.
pub const RATING_MAX: u8 = 5;

/// Substituted for ratings that are missing or unparseable.
pub const RATING_MIDPOINT: u8 = 3;

/// Menu size used when none is given (one dinner per day).
pub const DEFAULT_MENU_SIZE: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Seed record used when the pool file does not exist
// ─────────────────────────────────────────────────────────────────────────────

pub const SEED_MEAL_NAME: &str = "Arroz con Pollo";
pub const SEED_MEAL_LINK: &str =
    "https://www.epicurious.com/recipes/food/views/arroz-con-pollo-51190840";
pub const SEED_MEAL_PREP: i64 = 4;
pub const SEED_MEAL_NAUGHTY: i64 = 4;
pub const SEED_MEAL_COST: i64 = 3;
pub const SEED_MEAL_HEAVY: i64 = 3;
pub const SEED_MEAL_LEFTOVERS: bool = true;

/// Clamp any integer into `RATING_MIN..=RATING_MAX`.
#[inline]
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(RATING_MIN as i64, RATING_MAX as i64) as u8
}

/// Get a human-readable label for a rating value.
pub fn rating_name(value: u8) -> &'static str {
    match value {
        1 => "very low",
        2 => "low",
        3 => "medium",
        4 => "high",
        5 => "very high",
        _ => "unknown",
    }
}
