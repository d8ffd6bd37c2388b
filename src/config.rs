use std::path::PathBuf;

use crate::error::Result;
use crate::models::UserGoal;

/// Name of the data file inside the application data directory.
pub const DATA_FILE_NAME: &str = "meals.json";

/// Application directory under the platform data directory.
pub const APP_DIR_NAME: &str = "FitnessMealTracker";

/// Where meals are stored when no path is given explicitly.
///
/// Uses `<data dir>/FitnessMealTracker/meals.json`, falling back to `meals.json`
/// in the working directory on platforms without a data directory.
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}

/// Pick the explicit path when one was supplied, otherwise the platform default.
pub fn resolve_data_file(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(default_data_file)
}

/// Raw goal values as read from flags or the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSettings {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl GoalSettings {
    /// Validate into a [`UserGoal`]; negative values fail with `OutOfRange`.
    pub fn to_goal(&self) -> Result<UserGoal> {
        UserGoal::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

impl Default for GoalSettings {
    fn default() -> Self {
        use crate::nutrition::constants::*;
        Self {
            calories: DEFAULT_DAILY_CALORIE_GOAL,
            protein: DEFAULT_DAILY_PROTEIN_GOAL,
            carbs: DEFAULT_DAILY_CARB_GOAL,
            fat: DEFAULT_DAILY_FAT_GOAL,
        }
    }
}
