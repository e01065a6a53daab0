use crate::menu::{MenuBuilder, MenuStats};
use crate::models::Meal;

/// Display the menu as a numbered list followed by its statistics.
pub fn display_menu<R>(builder: &MenuBuilder<'_, R>) {
    if builder.is_empty() {
        println!("No menu generated.");
        return;
    }

    println!();
    println!("=== Menu ===");
    println!();

    let max_name_len = builder
        .iter()
        .map(|(_, meal, _)| meal.name().len())
        .max()
        .unwrap_or(10);

    for (i, meal, pinned) in builder.iter() {
        let pin = if pinned { "*" } else { " " };
        println!(
            "{:>3}.{} {:<width$} | {}",
            i + 1,
            pin,
            meal.name(),
            ratings_summary(meal),
            width = max_name_len
        );
    }

    display_stats(&builder.stats());
}

/// Display aggregate ratings.
pub fn display_stats(stats: &MenuStats) {
    println!();
    println!("--- Summary ---");
    println!("Meals: {}", stats.count);
    println!("Avg prep time: {:.2}", stats.average_prep_time);
    println!("Avg naughtiness: {:.2}", stats.average_naughtiness);
    println!("Avg cost: {:.2}", stats.average_cost);
    println!("Avg heaviness: {:.2}", stats.average_heaviness);
    println!("Leftovers: {}", stats.leftovers_count);
    println!();
}

/// Display every meal in the pool.
pub fn display_meal_list(meals: &[Meal], title: &str) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} meals) ===", title, meals.len());
    println!();

    for meal in meals {
        println!("  {} - {}", meal.name(), ratings_summary(meal));
        if !meal.link().is_empty() {
            println!("      {}", meal.link());
        }
    }

    println!();
}

fn ratings_summary(meal: &Meal) -> String {
    format!(
        "prep:{} naughty:{} cost:{} heavy:{}{}",
        meal.prep_time(),
        meal.naughtiness(),
        meal.cost(),
        meal.heaviness(),
        if meal.produces_leftovers() {
            " [leftovers]"
        } else {
            ""
        }
    )
}
