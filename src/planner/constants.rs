/// Calories reported for a meal with no name.
pub const DEFAULT_CALORIES: u32 = 350;

/// Lower bound of the random calorie base.
pub const CALORIE_BASE_MIN: u32 = 250;

/// Width of the random calorie base range (draws 0..SPAN above the minimum).
pub const CALORIE_BASE_SPAN: u32 = 500;

/// Keyword rules for the calorie estimate, checked in order; the first
/// rule whose keyword appears in the lowercased meal name wins.
pub const CALORIE_MODIFIERS: &[(&[&str], f64)] = &[
    (&["salad", "vegetable"], 0.7),
    (&["chicken", "fish"], 1.0),
    (&["beef", "pork"], 1.2),
    (&["pasta", "rice"], 1.3),
    (&["dessert", "cake", "pie"], 1.5),
];

/// Restriction keywords that mark a vegetarian diet.
pub const VEGETARIAN_MARKERS: &[&str] = &["vegetarian", "vegan"];
