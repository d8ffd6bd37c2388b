use dialoguer::{Confirm, Input};

use crate::error::Result;
use crate::interface::validation::FoodItemDraft;

/// Fields of a food item that may already be known from flags.
#[derive(Debug, Clone, Default)]
pub struct FoodItemFields {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl FoodItemFields {
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.calories.is_some()
            && self.protein.is_some()
            && self.carbs.is_some()
            && self.fat.is_some()
    }
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn known_or_prompt(value: Option<f64>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => prompt_text(prompt, Some("0")),
    }
}

/// Ask for whichever food item fields were not supplied up front.
pub fn prompt_food_item(fields: &FoodItemFields) -> Result<FoodItemDraft> {
    let name = match &fields.name {
        Some(name) => name.clone(),
        None => prompt_text("Food name", None)?,
    };

    Ok(FoodItemDraft {
        name,
        calories: known_or_prompt(fields.calories, "Calories (kcal)")?,
        protein: known_or_prompt(fields.protein, "Protein (g)")?,
        carbs: known_or_prompt(fields.carbs, "Carbs (g)")?,
        fat: known_or_prompt(fields.fat, "Fat (g)")?,
    })
}

/// Turn fully supplied fields into a draft without prompting.
pub fn draft_from_fields(fields: &FoodItemFields) -> FoodItemDraft {
    let number = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    FoodItemDraft {
        name: fields.name.clone().unwrap_or_default(),
        calories: number(fields.calories),
        protein: number(fields.protein),
        carbs: number(fields.carbs),
        fat: number(fields.fat),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_fields_skip_prompting() {
        let fields = FoodItemFields {
            name: Some("Oats".to_string()),
            calories: Some(150.0),
            protein: Some(5.0),
            carbs: Some(27.0),
            fat: Some(2.5),
        };
        assert!(fields.is_complete());

        let item = draft_from_fields(&fields).parse().unwrap();
        assert_eq!(item.name(), "Oats");
        assert_eq!(item.fat(), 2.5);
    }

    #[test]
    fn test_incomplete_fields() {
        let fields = FoodItemFields {
            name: Some("Oats".to_string()),
            ..Default::default()
        };
        assert!(!fields.is_complete());
        assert!(!draft_from_fields(&fields).numbers_parse());
    }
}
