mod repository;
mod service;

pub use repository::{JsonMealRepository, MealRepository};
pub use service::MealService;
