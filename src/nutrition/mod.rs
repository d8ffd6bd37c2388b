pub mod calculations;
pub mod constants;

pub use calculations::{
    Nutrient, RemainingNutrients, calculate_remaining, calculate_remaining_calories,
    calculate_remaining_carbs, calculate_remaining_fat, calculate_remaining_protein,
};
pub use constants::*;
