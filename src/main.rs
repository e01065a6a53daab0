use std::path::Path;

use clap::Parser;

use menu_maker_rs::cli::{Cli, Command, PlanConfig};
use menu_maker_rs::error::{MenuError, Result};
use menu_maker_rs::interface::{
    display_meal_list, display_menu, prompt_menu_action, prompt_pool_meal, prompt_rating,
    prompt_slot, prompt_yes_no, resolve_meal_name, write_menu_csv, MenuAction,
};
use menu_maker_rs::menu::MenuBuilder;
use menu_maker_rs::models::Meal;
use menu_maker_rs::state::{load_meals, save_meals, MealPool};
use menu_maker_rs::telemetry::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let path = cli.file.as_path();

    match command {
        Command::Plan { meals, seed, csv } => cmd_plan(path, PlanConfig { meals, seed, csv }),
        Command::List => cmd_list(path),
        Command::Add {
            name,
            link,
            prep,
            naughty,
            cost,
            heavy,
            leftovers,
        } => cmd_add(
            path,
            Meal::with_ratings(name, link, cost, prep, naughty, heavy, leftovers),
        ),
        Command::Rate { name } => cmd_rate(path, &name),
        Command::Remove { name } => cmd_remove(path, &name),
    }
}

/// Build a menu and let the user refine it.
fn cmd_plan(path: &Path, config: PlanConfig) -> Result<()> {
    let meals = load_meals(path)?;
    println!("Loaded {} meals", meals.len());

    let mut builder = match config.seed {
        Some(seed) => MenuBuilder::seeded(&meals, seed),
        None => MenuBuilder::from_entropy(&meals),
    };
    builder.generate(config.meals)?;

    loop {
        display_menu(&builder);

        match prompt_menu_action()? {
            MenuAction::Reshuffle => builder.reshuffle()?,
            MenuAction::TogglePin => {
                let slot = prompt_slot(&builder, "Pin or unpin which meal?")?;
                let pinned = builder.toggle_pin(slot);
                println!("Meal {} {}", slot + 1, if pinned { "pinned" } else { "unpinned" });
            }
            MenuAction::Replace => {
                let slot = prompt_slot(&builder, "Replace which meal?")?;
                let replacement = prompt_pool_meal(builder.pool())?;

                // The builder does not reject duplicates here, so check first.
                let duplicate = builder
                    .slots()
                    .iter()
                    .enumerate()
                    .any(|(i, s)| i != slot && s.meal == replacement);
                if duplicate {
                    println!("That meal is already on the menu.");
                } else {
                    builder.replace_at(slot, replacement);
                }
            }
            MenuAction::AddMeal => match builder.add_slot() {
                Err(MenuError::InvalidOperation(_)) => {
                    println!("Every meal in the pool is already on the menu.");
                }
                other => other?,
            },
            MenuAction::Done => break,
        }
    }

    if let Some(csv_path) = &config.csv {
        write_menu_csv(&builder, csv_path)?;
        println!("Wrote menu to {}", csv_path.display());
    }

    Ok(())
}

/// Print the meal pool.
fn cmd_list(path: &Path) -> Result<()> {
    let meals = load_meals(path)?;
    display_meal_list(&meals, "Meal pool");
    Ok(())
}

/// Append a meal and save.
fn cmd_add(path: &Path, meal: Meal) -> Result<()> {
    let mut pool = MealPool::new(load_meals(path)?);

    if pool.find(meal.name()).is_some() {
        let keep = prompt_yes_no(
            &format!("'{}' is already in the pool. Add another?", meal.name()),
            false,
        )?;
        if !keep {
            return Ok(());
        }
    }

    println!("Added {}", meal.debug_string());
    pool.add(meal);
    save_meals(path, pool.meals())?;
    println!("Meal pool saved ({} meals).", pool.len());
    Ok(())
}

/// Prompt for new ratings for one meal and save.
fn cmd_rate(path: &Path, name: &str) -> Result<()> {
    let mut pool = MealPool::new(load_meals(path)?);
    let id = resolve_meal_name(&pool, name)?;
    let current = pool
        .get(id)
        .cloned()
        .ok_or_else(|| MenuError::MealNotFound(name.to_string()))?;

    let prep = prompt_rating(current.name(), "Prep time", current.prep_time())?;
    let naughty = prompt_rating(current.name(), "Naughtiness", current.naughtiness())?;
    let cost = prompt_rating(current.name(), "Cost", current.cost())?;
    let heavy = prompt_rating(current.name(), "Heaviness", current.heaviness())?;
    let leftovers = prompt_yes_no("Does it produce leftovers?", current.produces_leftovers())?;

    let meal = pool
        .get_mut(id)
        .ok_or_else(|| MenuError::MealNotFound(name.to_string()))?;
    meal.set_prep_time(prep);
    meal.set_naughtiness(naughty);
    meal.set_cost(cost);
    meal.set_heaviness(heavy);
    meal.set_leftovers(leftovers);
    println!("Updated {}", meal.debug_string());

    save_meals(path, pool.meals())?;
    println!("Meal pool saved.");
    Ok(())
}

/// Remove a meal and save.
fn cmd_remove(path: &Path, name: &str) -> Result<()> {
    let mut pool = MealPool::new(load_meals(path)?);
    let id = resolve_meal_name(&pool, name)?;
    let resolved = pool
        .get(id)
        .map(|m| m.name().to_string())
        .ok_or_else(|| MenuError::MealNotFound(name.to_string()))?;

    if !prompt_yes_no(&format!("Remove '{}'?", resolved), true)? {
        return Ok(());
    }

    pool.remove_at(id);
    save_meals(path, pool.meals())?;
    println!("Removed {}. {} meals left.", resolved, pool.len());
    Ok(())
}
