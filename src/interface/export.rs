use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{Result, TrackerError};
use crate::models::DailySummary;

const HEADER: [&str; 6] = ["meal", "food", "calories", "protein", "carbs", "fat"];

/// Write one CSV row per food item, in meal order.
pub fn write_summary_csv<W: Write>(summary: &DailySummary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for meal in summary.meals() {
        for item in meal.items() {
            wtr.write_record([
                meal.name().to_string(),
                item.name().to_string(),
                item.calories().to_string(),
                item.protein().to_string(),
                item.carbs().to_string(),
                item.fat().to_string(),
            ])?;
        }
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Export the day to a CSV file at `path`.
pub fn export_csv(summary: &DailySummary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| TrackerError::storage(path, e))?;
    write_summary_csv(summary, file)?;
    info!(path = %path.display(), meals = summary.len(), "exported csv");
    Ok(())
}
