use crate::models::{DailySummary, Meal, UserGoal};
use crate::nutrition::{Nutrient, calculate_remaining};

/// Format one totals line: calories, protein, carbs, fat.
fn totals_line(calories: f64, protein: f64, carbs: f64, fat: f64) -> String {
    format!(
        "{:>7.1} kcal | P {:>6.1} g | C {:>6.1} g | F {:>6.1} g",
        calories, protein, carbs, fat
    )
}

/// Render a single meal with its numbered items and subtotal.
pub fn format_meal(index: usize, meal: &Meal) -> String {
    let name = if meal.name().is_empty() {
        "(unnamed)"
    } else {
        meal.name()
    };

    let mut out = format!("{:>2}. {}\n", index, name);

    if meal.is_empty() {
        out.push_str("      (no items)\n");
    }

    let width = meal
        .items()
        .iter()
        .map(|item| item.name().chars().count())
        .max()
        .unwrap_or(0);

    for (i, item) in meal.items().iter().enumerate() {
        out.push_str(&format!(
            "    {:>2}) {:<width$}  {}\n",
            i + 1,
            item.name(),
            totals_line(item.calories(), item.protein(), item.carbs(), item.fat()),
            width = width
        ));
    }

    out.push_str(&format!(
        "        subtotal  {}\n",
        totals_line(
            meal.total_calories(),
            meal.total_protein(),
            meal.total_carbs(),
            meal.total_fat()
        )
    ));
    out
}

/// Render the whole day: every meal, day totals and remaining against goal.
pub fn format_daily_summary(summary: &DailySummary, goal: &UserGoal) -> String {
    let mut out = String::new();
    out.push_str("=== Today's Meals ===\n\n");

    if summary.is_empty() {
        out.push_str("No meals logged yet.\n");
    }

    for (i, meal) in summary.meals().iter().enumerate() {
        out.push_str(&format_meal(i + 1, meal));
        out.push('\n');
    }

    out.push_str("--- Totals ---\n");
    out.push_str(&totals_line(
        summary.total_calories(),
        summary.total_protein(),
        summary.total_carbs(),
        summary.total_fat(),
    ));
    out.push_str("\n\n--- Remaining vs Goal ---\n");

    let remaining = calculate_remaining(summary, goal);
    let goals = [
        goal.daily_calorie_goal(),
        goal.daily_protein_goal(),
        goal.daily_carb_goal(),
        goal.daily_fat_goal(),
    ];

    for (nutrient, target) in Nutrient::ALL.into_iter().zip(goals) {
        let left = remaining.get(nutrient);
        let tag = if left < 0.0 { "  [exceeded]" } else { "" };
        out.push_str(&format!(
            "{:<9} {:>8.1} of {:>7.1} {}{}\n",
            nutrient.to_string(),
            left,
            target,
            nutrient.unit(),
            tag
        ));
    }

    out
}

pub fn display_daily_summary(summary: &DailySummary, goal: &UserGoal) {
    println!();
    print!("{}", format_daily_summary(summary, goal));
    println!();
}
