use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::models::Meal;

/// Durable storage for the day's meals.
pub trait MealRepository {
    /// Load every stored meal in order. Returns an empty list when nothing has been stored.
    fn load_meals(&self) -> Result<Vec<Meal>>;

    /// Replace the stored meals with `meals`.
    fn save_meals(&self, meals: &[Meal]) -> Result<()>;
}

impl<R: MealRepository + ?Sized> MealRepository for &R {
    fn load_meals(&self) -> Result<Vec<Meal>> {
        (**self).load_meals()
    }

    fn save_meals(&self, meals: &[Meal]) -> Result<()> {
        (**self).save_meals(meals)
    }
}

/// Stores meals as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonMealRepository {
    path: PathBuf,
}

impl JsonMealRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(TrackerError::InvalidArgument(
                "File path cannot be empty".to_string(),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MealRepository for JsonMealRepository {
    /// A missing file, an empty file and a JSON `null` all load as no meals.
    fn load_meals(&self) -> Result<Vec<Meal>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file missing, starting empty");
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| TrackerError::storage(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let meals: Option<Vec<Meal>> =
            serde_json::from_str(&content).map_err(|e| TrackerError::storage(&self.path, e))?;
        let meals = meals.unwrap_or_else(|| {
            warn!(path = %self.path.display(), "data file holds null, treating as empty");
            Vec::new()
        });

        info!(path = %self.path.display(), count = meals.len(), "loaded meals");
        Ok(meals)
    }

    fn save_meals(&self, meals: &[Meal]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "creating data directory");
                fs::create_dir_all(parent).map_err(|e| TrackerError::storage(&self.path, e))?;
            }
        }

        let json =
            serde_json::to_string_pretty(meals).map_err(|e| TrackerError::storage(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| TrackerError::storage(&self.path, e))?;

        info!(path = %self.path.display(), count = meals.len(), "saved meals");
        Ok(())
    }
}
