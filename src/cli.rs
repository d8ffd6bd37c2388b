use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::GoalSettings;
use crate::interface::FoodItemFields;
use crate::nutrition::constants::*;

/// Fitness Meal Tracker: log today's meals and compare totals against daily goals.
#[derive(Parser, Debug)]
#[command(name = "meal_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meals JSON file. Defaults to the platform data directory.
    #[arg(short, long, env = "MEAL_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub goals: GoalArgs,
}

/// Daily goals used for the remaining-vs-goal report.
#[derive(Args, Debug, Clone)]
pub struct GoalArgs {
    /// Daily calorie goal (kcal).
    #[arg(long, env = "MEAL_TRACKER_CALORIE_GOAL", default_value_t = DEFAULT_DAILY_CALORIE_GOAL, allow_negative_numbers = true)]
    pub calorie_goal: f64,

    /// Daily protein goal (g).
    #[arg(long, env = "MEAL_TRACKER_PROTEIN_GOAL", default_value_t = DEFAULT_DAILY_PROTEIN_GOAL, allow_negative_numbers = true)]
    pub protein_goal: f64,

    /// Daily carbohydrate goal (g).
    #[arg(long, env = "MEAL_TRACKER_CARB_GOAL", default_value_t = DEFAULT_DAILY_CARB_GOAL, allow_negative_numbers = true)]
    pub carb_goal: f64,

    /// Daily fat goal (g).
    #[arg(long, env = "MEAL_TRACKER_FAT_GOAL", default_value_t = DEFAULT_DAILY_FAT_GOAL, allow_negative_numbers = true)]
    pub fat_goal: f64,
}

impl GoalArgs {
    pub fn settings(&self) -> GoalSettings {
        GoalSettings {
            calories: self.calorie_goal,
            protein: self.protein_goal,
            carbs: self.carb_goal,
            fat: self.fat_goal,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's meals, totals and what is left of each goal.
    Show,

    /// Log a new, empty meal.
    AddMeal {
        /// Name of the meal, e.g. "Breakfast".
        name: String,
    },

    /// Remove a meal by number or name.
    RemoveMeal {
        /// Meal number (as shown by `show`) or name.
        meal: String,
    },

    /// Add a food item to a meal. Missing values are prompted for.
    AddFood {
        /// Meal number (as shown by `show`) or name.
        meal: String,

        #[command(flatten)]
        food: FoodArgs,
    },

    /// Remove a food item from a meal.
    RemoveFood {
        /// Meal number (as shown by `show`) or name.
        meal: String,

        /// Item number within the meal.
        item: usize,
    },

    /// Remove every meal logged today.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Write today's food items to a CSV file.
    Export {
        /// Output CSV path.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct FoodArgs {
    /// Food name.
    #[arg(long)]
    pub name: Option<String>,

    /// Calories per serving (kcal).
    #[arg(long, allow_negative_numbers = true)]
    pub calories: Option<f64>,

    /// Protein per serving (g).
    #[arg(long, allow_negative_numbers = true)]
    pub protein: Option<f64>,

    /// Carbohydrates per serving (g).
    #[arg(long, allow_negative_numbers = true)]
    pub carbs: Option<f64>,

    /// Fat per serving (g).
    #[arg(long, allow_negative_numbers = true)]
    pub fat: Option<f64>,
}

impl From<FoodArgs> for FoodItemFields {
    fn from(args: FoodArgs) -> Self {
        FoodItemFields {
            name: args.name,
            calories: args.calories,
            protein: args.protein,
            carbs: args.carbs,
            fat: args.fat,
        }
    }
}
