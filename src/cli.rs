use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::menu::constants::{DEFAULT_MENU_SIZE, RATING_MIDPOINT};

/// MenuMaker — builds a random weekly menu from a pool of rated meals.
#[derive(Parser, Debug)]
#[command(name = "menu_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal pool JSON file.
    #[arg(short, long, default_value = "meals.json", global = true)]
    pub file: PathBuf,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a menu and refine it interactively.
    Plan {
        /// Number of meals on the menu.
        #[arg(short, long, default_value_t = DEFAULT_MENU_SIZE)]
        meals: usize,

        /// Random seed for a reproducible menu.
        #[arg(long)]
        seed: Option<u64>,

        /// Export the finished menu to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List every meal in the pool.
    List,

    /// Add a meal to the pool.
    Add {
        name: String,

        /// Recipe link.
        #[arg(long, default_value = "")]
        link: String,

        /// Preparation time rating (1-5).
        #[arg(long, default_value_t = RATING_MIDPOINT as i64, allow_hyphen_values = true)]
        prep: i64,

        /// Naughtiness rating (1-5).
        #[arg(long, default_value_t = RATING_MIDPOINT as i64, allow_hyphen_values = true)]
        naughty: i64,

        /// Ingredient cost rating (1-5).
        #[arg(long, default_value_t = RATING_MIDPOINT as i64, allow_hyphen_values = true)]
        cost: i64,

        /// Heaviness rating (1-5).
        #[arg(long, default_value_t = RATING_MIDPOINT as i64, allow_hyphen_values = true)]
        heavy: i64,

        /// The meal usually produces leftovers.
        #[arg(long)]
        leftovers: bool,
    },

    /// Re-rate a meal interactively.
    Rate { name: String },

    /// Remove a meal from the pool.
    Remove { name: String },
}

impl Default for Command {
    fn default() -> Self {
        let PlanConfig { meals, seed, csv } = PlanConfig::default();
        Command::Plan { meals, seed, csv }
    }
}

/// Settings for one `plan` run.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub meals: usize,
    pub seed: Option<u64>,
    pub csv: Option<PathBuf>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            meals: DEFAULT_MENU_SIZE,
            seed: None,
            csv: None,
        }
    }
}
