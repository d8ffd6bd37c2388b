use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::{ensure_non_negative, next_handle, normalize_name};

/// Identity of a food item within the running process.
///
/// Clones of a [`FoodItem`] share its id; a freshly constructed or loaded item always gets a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoodItemId(u64);

/// A named food with per-serving nutrient values.
///
/// All four nutrients are non-negative. Setters re-validate on every assignment
/// and leave the previous value in place when they fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FoodItemRecord")]
pub struct FoodItem {
    #[serde(skip)]
    id: FoodItemId,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Calories")]
    calories: f64,

    #[serde(rename = "Protein")]
    protein: f64,

    #[serde(rename = "Carbs")]
    carbs: f64,

    #[serde(rename = "Fat")]
    fat: f64,
}

impl FoodItemId {
    fn fresh() -> Self {
        FoodItemId(next_handle())
    }
}

impl FoodItem {
    /// Build a food item, validating every nutrient.
    pub fn new(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Result<Self> {
        Ok(Self {
            id: FoodItemId::fresh(),
            name: normalize_name(name),
            calories: ensure_non_negative("Calories", calories)?,
            protein: ensure_non_negative("Protein", protein)?,
            carbs: ensure_non_negative("Carbs", carbs)?,
            fat: ensure_non_negative("Fat", fat)?,
        })
    }

    pub fn id(&self) -> FoodItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    pub fn set_calories(&mut self, value: f64) -> Result<()> {
        self.calories = ensure_non_negative("Calories", value)?;
        Ok(())
    }

    pub fn set_protein(&mut self, value: f64) -> Result<()> {
        self.protein = ensure_non_negative("Protein", value)?;
        Ok(())
    }

    pub fn set_carbs(&mut self, value: f64) -> Result<()> {
        self.carbs = ensure_non_negative("Carbs", value)?;
        Ok(())
    }

    pub fn set_fat(&mut self, value: f64) -> Result<()> {
        self.fat = ensure_non_negative("Fat", value)?;
        Ok(())
    }

    /// One-line description for listings and logs.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} C:{} F:{}",
            self.name, self.calories, self.protein, self.carbs, self.fat
        )
    }
}

impl Default for FoodItem {
    fn default() -> Self {
        Self {
            id: FoodItemId::fresh(),
            name: String::new(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        }
    }
}

/// On-disk shape of a food item. Missing fields fall back to their defaults.
#[derive(Debug, Deserialize)]
struct FoodItemRecord {
    #[serde(rename = "Name", default)]
    name: Option<String>,

    #[serde(rename = "Calories", default)]
    calories: f64,

    #[serde(rename = "Protein", default)]
    protein: f64,

    #[serde(rename = "Carbs", default)]
    carbs: f64,

    #[serde(rename = "Fat", default)]
    fat: f64,
}

impl TryFrom<FoodItemRecord> for FoodItem {
    type Error = TrackerError;

    fn try_from(record: FoodItemRecord) -> Result<Self> {
        FoodItem::new(
            record.name.as_deref().unwrap_or_default(),
            record.calories,
            record.protein,
            record.carbs,
            record.fat,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> FoodItem {
        FoodItem::new("Egg", 70.0, 6.0, 0.5, 5.0).unwrap()
    }

    #[test]
    fn test_new_reads_back_exactly() {
        let food = egg();
        assert_eq!(food.name(), "Egg");
        assert_eq!(food.calories(), 70.0);
        assert_eq!(food.protein(), 6.0);
        assert_eq!(food.carbs(), 0.5);
        assert_eq!(food.fat(), 5.0);
    }

    #[test]
    fn test_default_is_empty() {
        let food = FoodItem::default();
        assert_eq!(food.name(), "");
        assert_eq!(food.calories(), 0.0);
        assert_eq!(food.fat(), 0.0);
    }

    #[test]
    fn test_new_rejects_negative() {
        let err = FoodItem::new("Bad", 10.0, -1.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::OutOfRange {
                field: "Protein",
                ..
            }
        ));
    }

    #[test]
    fn test_setter_keeps_prior_value_on_error() {
        let mut food = egg();
        assert!(food.set_calories(-5.0).is_err());
        assert_eq!(food.calories(), 70.0);

        food.set_carbs(0.0).unwrap();
        assert_eq!(food.carbs(), 0.0);
    }

    #[test]
    fn test_blank_name_normalizes() {
        let mut food = egg();
        food.set_name("   ");
        assert_eq!(food.name(), "");

        let blank = FoodItem::new("\t", 1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(blank.name(), "");
    }

    #[test]
    fn test_clone_shares_identity() {
        let food = egg();
        let twin = egg();
        assert_eq!(food.clone().id(), food.id());
        assert_ne!(twin.id(), food.id());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(egg()).unwrap();
        assert_eq!(json["Name"], "Egg");
        assert_eq!(json["Calories"], 70.0);
        assert_eq!(json["Carbs"], 0.5);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: FoodItem =
            serde_json::from_str(r#"{"Name": null, "Calories": 10, "Protein": 1}"#).unwrap();
        assert_eq!(ok.name(), "");
        assert_eq!(ok.calories(), 10.0);
        assert_eq!(ok.fat(), 0.0);

        let bad = serde_json::from_str::<FoodItem>(r#"{"Name": "X", "Fat": -2}"#);
        assert!(bad.is_err());
    }
}
