mod food;
mod goal;
mod meal;
mod summary;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, TrackerError};

pub use food::{FoodItem, FoodItemId};
pub use goal::UserGoal;
pub use meal::{Meal, MealId};
pub use summary::DailySummary;

/// Smallest value accepted for any nutrient or goal field.
pub const MINIMUM_NUTRIENT_VALUE: f64 = 0.0;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique handle for a food item or meal.
fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

/// Whitespace-only names collapse to the empty string; anything else is kept verbatim.
pub fn normalize_name(name: &str) -> String {
    if name.trim().is_empty() {
        String::new()
    } else {
        name.to_string()
    }
}

/// Reject negative and non-finite values for a named field.
///
/// JSON has no representation for NaN or infinity, so a value that passes here
/// always survives a save and load.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < MINIMUM_NUTRIENT_VALUE {
        return Err(TrackerError::OutOfRange { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   \t\n"), "");
        assert_eq!(normalize_name(" Oats "), " Oats ");
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("Calories", 0.0).unwrap(), 0.0);
        assert_eq!(ensure_non_negative("Calories", 12.5).unwrap(), 12.5);
        assert!(matches!(
            ensure_non_negative("Calories", -0.1),
            Err(TrackerError::OutOfRange {
                field: "Calories",
                ..
            })
        ));
        assert!(ensure_non_negative("Fat", f64::NAN).is_err());
        assert!(matches!(
            ensure_non_negative("Protein", f64::INFINITY),
            Err(TrackerError::OutOfRange {
                field: "Protein",
                ..
            })
        ));
        assert!(ensure_non_negative("Carbs", f64::NEG_INFINITY).is_err());
        assert_eq!(ensure_non_negative("Calories", f64::MAX).unwrap(), f64::MAX);
    }

    #[test]
    fn test_handles_are_unique() {
        let a = next_handle();
        let b = next_handle();
        assert_ne!(a, b);
    }
}
