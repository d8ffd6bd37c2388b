/// Default daily calorie goal (kcal) used when none is configured.
pub const DEFAULT_DAILY_CALORIE_GOAL: f64 = 2000.0;

/// Default daily protein goal in grams.
pub const DEFAULT_DAILY_PROTEIN_GOAL: f64 = 150.0;

/// Default daily carbohydrate goal in grams.
pub const DEFAULT_DAILY_CARB_GOAL: f64 = 250.0;

/// Default daily fat goal in grams.
pub const DEFAULT_DAILY_FAT_GOAL: f64 = 65.0;
