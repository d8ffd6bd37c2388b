use dialoguer::Select;
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::{FoodItemId, Meal, MealId};

/// Minimum Jaro-Winkler score for a fuzzy meal-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Maximum number of fuzzy candidates offered for selection.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

/// How a meal selector resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum MealMatch {
    Found(MealId),
    /// Several fuzzy candidates, best first.
    Ambiguous(Vec<MealId>),
    NotFound,
}

/// Resolve `selector` against `meals` without prompting.
///
/// Tries a 1-based index, then a case-insensitive exact name, then fuzzy names.
pub fn match_meal(meals: &[Meal], selector: &str) -> MealMatch {
    let selector = selector.trim();

    if let Ok(index) = selector.parse::<usize>() {
        if let Some(meal) = index.checked_sub(1).and_then(|i| meals.get(i)) {
            return MealMatch::Found(meal.id());
        }
    }

    let wanted = selector.to_lowercase();
    if let Some(meal) = meals.iter().find(|m| m.name().to_lowercase() == wanted) {
        return MealMatch::Found(meal.id());
    }

    let mut candidates: Vec<(&Meal, f64)> = meals
        .iter()
        .map(|m| (m, jaro_winkler(&m.name().to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    match candidates.len() {
        0 => MealMatch::NotFound,
        1 => MealMatch::Found(candidates[0].0.id()),
        _ => MealMatch::Ambiguous(
            candidates
                .into_iter()
                .take(FUZZY_MAX_CANDIDATES)
                .map(|(m, _)| m.id())
                .collect(),
        ),
    }
}

/// Resolve `selector`, asking the user to choose when several meals match.
pub fn select_meal(meals: &[Meal], selector: &str) -> Result<MealId> {
    match match_meal(meals, selector) {
        MealMatch::Found(id) => Ok(id),
        MealMatch::NotFound => Err(TrackerError::InvalidArgument(format!(
            "No meal matches '{selector}'"
        ))),
        MealMatch::Ambiguous(ids) => {
            let options: Vec<String> = ids
                .iter()
                .filter_map(|id| meals.iter().find(|m| m.id() == *id))
                .map(|m| m.name().to_string())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which meal did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            ids.get(selection).copied().ok_or_else(|| {
                TrackerError::InvalidArgument(format!("No meal selected for '{selector}'"))
            })
        }
    }
}

/// Resolve a 1-based item position within `meal`.
pub fn select_food_item(meal: &Meal, position: usize) -> Result<FoodItemId> {
    position
        .checked_sub(1)
        .and_then(|i| meal.items().get(i))
        .map(|item| item.id())
        .ok_or_else(|| {
            TrackerError::InvalidArgument(format!(
                "'{}' has no item #{position} ({} items)",
                meal.name(),
                meal.len()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn meals() -> Vec<Meal> {
        vec![
            Meal::new("Breakfast"),
            Meal::new("Lunch"),
            Meal::new("Dinner"),
            Meal::new("Dinner party"),
        ]
    }

    #[test]
    fn test_match_by_index() {
        let meals = meals();
        assert_eq!(match_meal(&meals, "2"), MealMatch::Found(meals[1].id()));
        assert_eq!(match_meal(&meals, "0"), MealMatch::NotFound);
    }

    #[test]
    fn test_match_by_exact_name() {
        let meals = meals();
        assert_eq!(match_meal(&meals, "LUNCH"), MealMatch::Found(meals[1].id()));
        assert_eq!(match_meal(&meals, "dinner"), MealMatch::Found(meals[2].id()));
    }

    #[test]
    fn test_match_fuzzy() {
        let meals = meals();
        assert_eq!(
            match_meal(&meals, "brekfast"),
            MealMatch::Found(meals[0].id())
        );
        assert_eq!(match_meal(&meals, "zzz"), MealMatch::NotFound);
    }

    #[test]
    fn test_match_ambiguous() {
        let meals = meals();
        match match_meal(&meals, "dinnr") {
            MealMatch::Ambiguous(ids) => {
                assert!(ids.contains(&meals[2].id()));
                assert!(ids.contains(&meals[3].id()));
            }
            other => panic!("expected ambiguous match, got {other:?}"),
        }
    }

    #[test]
    fn test_select_food_item() {
        let mut meal = Meal::new("Snack");
        let apple = FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3).unwrap();
        meal.add_food_item(apple.clone());

        assert_eq!(select_food_item(&meal, 1).unwrap(), apple.id());
        assert!(select_food_item(&meal, 0).is_err());
        assert!(select_food_item(&meal, 2).is_err());
    }
}
