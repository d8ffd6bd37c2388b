use crate::error::{Result, TrackerError};
use crate::models::{FoodItem, FoodItemId, MealId};

/// Raw text for a food item as typed by the user, before parsing.
#[derive(Debug, Clone, Default)]
pub struct FoodItemDraft {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl FoodItemDraft {
    /// True when every numeric field parses. Sign is checked later by [`FoodItemDraft::parse`].
    pub fn numbers_parse(&self) -> bool {
        [&self.calories, &self.protein, &self.carbs, &self.fat]
            .into_iter()
            .all(|field| field.trim().parse::<f64>().is_ok())
    }

    /// Build the food item, failing with `InvalidArgument` on a blank name or
    /// unparseable number and `OutOfRange` on a negative or non-finite one.
    pub fn parse(&self) -> Result<FoodItem> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidArgument(
                "Food item name cannot be empty".to_string(),
            ));
        }

        FoodItem::new(
            &self.name,
            parse_number("Calories", &self.calories)?,
            parse_number("Protein", &self.protein)?,
            parse_number("Carbs", &self.carbs)?,
            parse_number("Fat", &self.fat)?,
        )
    }
}

fn parse_number(field: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| TrackerError::InvalidArgument(format!("{field}: '{text}' is not a number")))
}

pub fn can_add_meal(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn can_remove_meal(selected_meal: Option<MealId>) -> bool {
    selected_meal.is_some()
}

pub fn can_add_food_item(selected_meal: Option<MealId>, draft: &FoodItemDraft) -> bool {
    selected_meal.is_some() && !draft.name.trim().is_empty() && draft.numbers_parse()
}

pub fn can_remove_food_item(
    selected_meal: Option<MealId>,
    selected_item: Option<FoodItemId>,
) -> bool {
    selected_meal.is_some() && selected_item.is_some()
}
