pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{DailySummary, FoodItem, Meal, UserGoal};
pub use state::{JsonMealRepository, MealRepository, MealService};
