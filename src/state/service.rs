use tracing::debug;

use crate::error::Result;
use crate::models::{DailySummary, Meal, MealId};
use crate::state::MealRepository;

/// Owns today's [`DailySummary`] and persists it through a [`MealRepository`].
pub struct MealService<R: MealRepository> {
    repository: R,
    summary: DailySummary,
}

impl<R: MealRepository> MealService<R> {
    /// Create a service with an empty day.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            summary: DailySummary::new(),
        }
    }

    pub fn all_meals(&self) -> &[Meal] {
        self.summary.meals()
    }

    pub fn daily_summary(&self) -> &DailySummary {
        &self.summary
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.summary.meal(id)
    }

    /// Mutable access to one logged meal, e.g. to add or remove food items.
    pub fn meal_mut(&mut self, id: MealId) -> Option<&mut Meal> {
        self.summary.meal_mut(id)
    }

    pub fn add_meal(&mut self, meal: Meal) {
        debug!(meal = meal.name(), "adding meal");
        self.summary.add_meal(meal);
    }

    pub fn remove_meal(&mut self, id: MealId) -> bool {
        let removed = self.summary.remove_meal(id);
        debug!(?id, removed, "removing meal");
        removed
    }

    pub fn clear_meals(&mut self) {
        self.summary.clear_meals();
    }

    /// Persist the current meals.
    pub fn save_meals(&self) -> Result<()> {
        self.repository.save_meals(self.summary.meals())
    }

    /// Replace the day's meals with what the repository holds.
    ///
    /// All-or-nothing: if the repository fails, the current meals stay as they were.
    pub fn load_meals(&mut self) -> Result<()> {
        let loaded = self.repository.load_meals()?;
        debug!(count = loaded.len(), "replacing meals from storage");
        self.summary.replace_meals(loaded);
        Ok(())
    }
}
