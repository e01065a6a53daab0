use std::path::Path;

use crate::error::Result;
use crate::menu::MenuBuilder;

/// Write the current menu to a CSV file, one row per slot.
pub fn write_menu_csv<R>(builder: &MenuBuilder<'_, R>, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot",
        "name",
        "link",
        "prep",
        "naughty",
        "cost",
        "heavy",
        "leftovers",
        "pinned",
    ])?;

    for (i, meal, pinned) in builder.iter() {
        wtr.write_record([
            (i + 1).to_string(),
            meal.name().to_string(),
            meal.link().to_string(),
            meal.prep_time().to_string(),
            meal.naughtiness().to_string(),
            meal.cost().to_string(),
            meal.heaviness().to_string(),
            meal.produces_leftovers().to_string(),
            pinned.to_string(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = builder.len(), "exported menu");
    Ok(())
}
