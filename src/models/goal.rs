use crate::error::Result;
use crate::models::ensure_non_negative;

/// Daily nutrient targets. Every field is independently validated as non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserGoal {
    daily_calorie_goal: f64,
    daily_protein_goal: f64,
    daily_carb_goal: f64,
    daily_fat_goal: f64,
}

impl UserGoal {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Result<Self> {
        let mut goal = Self::default();
        goal.set_daily_calorie_goal(calories)?;
        goal.set_daily_protein_goal(protein)?;
        goal.set_daily_carb_goal(carbs)?;
        goal.set_daily_fat_goal(fat)?;
        Ok(goal)
    }

    pub fn daily_calorie_goal(&self) -> f64 {
        self.daily_calorie_goal
    }

    pub fn daily_protein_goal(&self) -> f64 {
        self.daily_protein_goal
    }

    pub fn daily_carb_goal(&self) -> f64 {
        self.daily_carb_goal
    }

    pub fn daily_fat_goal(&self) -> f64 {
        self.daily_fat_goal
    }

    pub fn set_daily_calorie_goal(&mut self, value: f64) -> Result<()> {
        self.daily_calorie_goal = ensure_non_negative("Daily calorie goal", value)?;
        Ok(())
    }

    pub fn set_daily_protein_goal(&mut self, value: f64) -> Result<()> {
        self.daily_protein_goal = ensure_non_negative("Daily protein goal", value)?;
        Ok(())
    }

    pub fn set_daily_carb_goal(&mut self, value: f64) -> Result<()> {
        self.daily_carb_goal = ensure_non_negative("Daily carb goal", value)?;
        Ok(())
    }

    pub fn set_daily_fat_goal(&mut self, value: f64) -> Result<()> {
        self.daily_fat_goal = ensure_non_negative("Daily fat goal", value)?;
        Ok(())
    }
}
