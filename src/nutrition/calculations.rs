use std::fmt;

use crate::models::{DailySummary, UserGoal};

/// The four tracked nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Display unit for amounts of this nutrient.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
        };
        f.write_str(label)
    }
}

/// Calories left before the daily goal is reached. Negative once exceeded.
pub fn calculate_remaining_calories(summary: &DailySummary, goal: &UserGoal) -> f64 {
    goal.daily_calorie_goal() - summary.total_calories()
}

/// Protein (g) left before the daily goal is reached. Negative once exceeded.
pub fn calculate_remaining_protein(summary: &DailySummary, goal: &UserGoal) -> f64 {
    goal.daily_protein_goal() - summary.total_protein()
}

/// Carbohydrates (g) left before the daily goal is reached. Negative once exceeded.
pub fn calculate_remaining_carbs(summary: &DailySummary, goal: &UserGoal) -> f64 {
    goal.daily_carb_goal() - summary.total_carbs()
}

/// Fat (g) left before the daily goal is reached. Negative once exceeded.
pub fn calculate_remaining_fat(summary: &DailySummary, goal: &UserGoal) -> f64 {
    goal.daily_fat_goal() - summary.total_fat()
}

/// Goal-minus-actual for every nutrient at once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RemainingNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl RemainingNutrients {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Nutrients whose goal has been overshot.
    pub fn exceeded(&self) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|&n| self.get(n) < 0.0)
            .collect()
    }
}

pub fn calculate_remaining(summary: &DailySummary, goal: &UserGoal) -> RemainingNutrients {
    RemainingNutrients {
        calories: calculate_remaining_calories(summary, goal),
        protein: calculate_remaining_protein(summary, goal),
        carbs: calculate_remaining_carbs(summary, goal),
        fat: calculate_remaining_fat(summary, goal),
    }
}
