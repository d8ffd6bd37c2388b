use crate::models::{Meal, MealId};

/// All meals logged for the current day.
#[derive(Debug, Clone, Default)]
pub struct DailySummary {
    meals: Vec<Meal>,
}

impl DailySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id() == id)
    }

    pub fn meal_mut(&mut self, id: MealId) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|meal| meal.id() == id)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn add_meal(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    /// Remove the first meal carrying `id`. Returns false when nothing matched.
    pub fn remove_meal(&mut self, id: MealId) -> bool {
        match self.meals.iter().position(|meal| meal.id() == id) {
            Some(index) => {
                self.meals.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_meals(&mut self) {
        self.meals.clear();
    }

    /// Swap in a whole new day of meals, keeping their order.
    pub fn replace_meals(&mut self, meals: Vec<Meal>) {
        self.meals = meals;
    }

    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(Meal::total_calories).sum()
    }

    pub fn total_protein(&self) -> f64 {
        self.meals.iter().map(Meal::total_protein).sum()
    }

    pub fn total_carbs(&self) -> f64 {
        self.meals.iter().map(Meal::total_carbs).sum()
    }

    pub fn total_fat(&self) -> f64 {
        self.meals.iter().map(Meal::total_fat).sum()
    }
}
