use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, FoodItemId, next_handle, normalize_name};

/// Identity of a meal within the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MealId(u64);

impl MealId {
    fn fresh() -> Self {
        MealId(next_handle())
    }
}

/// A named, ordered collection of food items.
///
/// Totals are recomputed from the current items on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "MealRecord")]
pub struct Meal {
    #[serde(skip)]
    id: MealId,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Items")]
    items: Vec<FoodItem>,
}

impl Meal {
    pub fn new(name: &str) -> Self {
        Self {
            id: MealId::fresh(),
            name: normalize_name(name),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn item(&self, id: FoodItemId) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_food_item(&mut self, item: FoodItem) {
        self.items.push(item);
    }

    /// Remove the first item carrying `id`. Returns false when nothing matched.
    pub fn remove_food_item(&mut self, id: FoodItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_food_items(&mut self) {
        self.items.clear();
    }

    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(FoodItem::calories).sum()
    }

    pub fn total_protein(&self) -> f64 {
        self.items.iter().map(FoodItem::protein).sum()
    }

    pub fn total_carbs(&self) -> f64 {
        self.items.iter().map(FoodItem::carbs).sum()
    }

    pub fn total_fat(&self) -> f64 {
        self.items.iter().map(FoodItem::fat).sum()
    }
}

impl Default for Meal {
    fn default() -> Self {
        Meal::new("")
    }
}

#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "Name", default)]
    name: Option<String>,

    #[serde(rename = "Items", default)]
    items: Option<Vec<FoodItem>>,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        let mut meal = Meal::new(record.name.as_deref().unwrap_or_default());
        meal.items = record.items.unwrap_or_default();
        meal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem::new(name, calories, protein, carbs, fat).unwrap()
    }

    #[test]
    fn test_new_meal_is_empty() {
        let meal = Meal::new("Breakfast");
        assert_eq!(meal.name(), "Breakfast");
        assert!(meal.is_empty());
        assert_eq!(meal.total_calories(), 0.0);

        assert_eq!(Meal::default().name(), "");
        assert_eq!(Meal::new("  ").name(), "");
    }

    #[test]
    fn test_totals_follow_items() {
        let mut meal = Meal::new("Lunch");
        let rice = food("Rice", 200.0, 4.0, 45.0, 0.5);
        let chicken = food("Chicken", 200.0, 30.0, 0.0, 8.0);

        meal.add_food_item(rice.clone());
        assert_eq!(meal.total_calories(), 200.0);

        meal.add_food_item(chicken);
        assert_eq!(meal.total_calories(), 400.0);
        assert_eq!(meal.total_protein(), 34.0);
        assert_eq!(meal.total_carbs(), 45.0);
        assert_eq!(meal.total_fat(), 8.5);

        assert!(meal.remove_food_item(rice.id()));
        assert_eq!(meal.total_calories(), 200.0);
        assert_eq!(meal.total_carbs(), 0.0);
    }

    #[test]
    fn test_remove_is_by_identity() {
        let mut meal = Meal::new("Snack");
        let apple = food("Apple", 95.0, 0.5, 25.0, 0.3);
        let lookalike = food("Apple", 95.0, 0.5, 25.0, 0.3);
        meal.add_food_item(apple.clone());

        assert!(!meal.remove_food_item(lookalike.id()));
        assert_eq!(meal.len(), 1);

        assert!(meal.remove_food_item(apple.id()));
        assert!(meal.is_empty());
        assert!(!meal.remove_food_item(apple.id()));
    }

    #[test]
    fn test_duplicate_identity_removes_first_only() {
        let mut meal = Meal::new("Snack");
        let nuts = food("Nuts", 160.0, 6.0, 6.0, 14.0);
        let tea = food("Tea", 2.0, 0.0, 0.0, 0.0);
        meal.add_food_item(nuts.clone());
        meal.add_food_item(tea.clone());
        meal.add_food_item(nuts.clone());

        assert!(meal.remove_food_item(nuts.id()));
        assert_eq!(meal.len(), 2);
        assert_eq!(meal.items()[0].id(), tea.id());
        assert_eq!(meal.items()[1].id(), nuts.id());
        assert_eq!(meal.total_calories(), 162.0);
    }

    #[test]
    fn test_clear_food_items() {
        let mut meal = Meal::new("Dinner");
        meal.add_food_item(food("Soup", 150.0, 5.0, 20.0, 4.0));
        meal.clear_food_items();
        assert!(meal.is_empty());
        assert_eq!(meal.total_fat(), 0.0);

        meal.clear_food_items();
        assert!(meal.is_empty());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let meal: Meal = serde_json::from_str(r#"{"Name": "Brunch"}"#).unwrap();
        assert_eq!(meal.name(), "Brunch");
        assert!(meal.is_empty());

        let meal: Meal = serde_json::from_str(r#"{"Name": " ", "Items": null}"#).unwrap();
        assert_eq!(meal.name(), "");
        assert!(meal.is_empty());
    }
}
