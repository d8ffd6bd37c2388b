pub mod export;
pub mod prompts;
pub mod render;
pub mod select;
pub mod validation;

pub use export::{export_csv, write_summary_csv};
pub use prompts::{FoodItemFields, draft_from_fields, prompt_food_item, prompt_yes_no};
pub use render::{display_daily_summary, format_daily_summary, format_meal};
pub use select::{MealMatch, match_meal, select_food_item, select_meal};
pub use validation::{
    FoodItemDraft, can_add_food_item, can_add_meal, can_remove_food_item, can_remove_meal,
};
