use serde::Serialize;

use crate::menu::constants::{clamp_rating, RATING_MIDPOINT};

/// Name given to meals created without one.
pub const DEFAULT_MEAL_NAME: &str = "New Meal";

/// A meal with four relative 1-5 ratings and a leftovers flag.
///
/// Ratings are clamped into `RATING_MIN..=RATING_MAX` whenever they are
/// written, so every value read back is in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    name: String,

    /// Recipe URL(s); may be empty.
    link: String,

    /// 1 = quick, 5 = all day.
    #[serde(rename = "prep")]
    prep_time: u8,

    /// 1 = kale, 5 = mac and cheese with bacon.
    #[serde(rename = "naughty")]
    naughtiness: u8,

    /// 1 = very cheap, 5 = very expensive.
    cost: u8,

    /// 1 = light summer snack, 5 = holiday feast.
    #[serde(rename = "heavy")]
    heaviness: u8,

    leftovers: bool,
}

impl Meal {
    /// A meal with midpoint ratings, no link and no leftovers.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_link(name, "")
    }

    /// A meal with a recipe link and midpoint ratings.
    pub fn with_link(name: impl Into<String>, link: impl Into<String>) -> Self {
        let mid = RATING_MIDPOINT as i64;
        Self::with_ratings(name, link, mid, mid, mid, mid, false)
    }

    /// A fully specified meal. Every rating is clamped.
    pub fn with_ratings(
        name: impl Into<String>,
        link: impl Into<String>,
        cost: i64,
        prep: i64,
        naughty: i64,
        heavy: i64,
        leftovers: bool,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            prep_time: clamp_rating(prep),
            naughtiness: clamp_rating(naughty),
            cost: clamp_rating(cost),
            heaviness: clamp_rating(heavy),
            leftovers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = link.into();
    }

    pub fn prep_time(&self) -> u8 {
        self.prep_time
    }

    pub fn set_prep_time(&mut self, value: i64) {
        self.prep_time = clamp_rating(value);
    }

    pub fn naughtiness(&self) -> u8 {
        self.naughtiness
    }

    pub fn set_naughtiness(&mut self, value: i64) {
        self.naughtiness = clamp_rating(value);
    }

    pub fn cost(&self) -> u8 {
        self.cost
    }

    pub fn set_cost(&mut self, value: i64) {
        self.cost = clamp_rating(value);
    }

    pub fn heaviness(&self) -> u8 {
        self.heaviness
    }

    pub fn set_heaviness(&mut self, value: i64) {
        self.heaviness = clamp_rating(value);
    }

    pub fn produces_leftovers(&self) -> bool {
        self.leftovers
    }

    pub fn set_leftovers(&mut self, leftovers: bool) {
        self.leftovers = leftovers;
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: prep:{} naughty:{} cost:{} heavy:{} leftovers:{}",
            self.name, self.prep_time, self.naughtiness, self.cost, self.heaviness, self.leftovers
        )
    }
}

impl Default for Meal {
    fn default() -> Self {
        Self::new(DEFAULT_MEAL_NAME)
    }
}
