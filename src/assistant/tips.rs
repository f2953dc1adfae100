use rand::seq::SliceRandom;

/// Daily nutrition tips shown on the dashboard.
pub const DAILY_TIPS: &[&str] = &[
    "Stay hydrated by drinking at least 8 glasses of water daily.",
    "Include a variety of colorful fruits and vegetables in your diet for essential vitamins and minerals.",
    "Choose whole grains over refined grains for more fiber and nutrients.",
    "Incorporate lean proteins like chicken, fish, beans, and tofu into your meals.",
    "Limit processed foods and foods high in added sugars and sodium.",
    "Healthy fats from avocados, nuts, and olive oil are essential for your diet.",
    "Practice portion control to maintain a healthy weight.",
    "Meal prep can help you make healthier food choices throughout the week.",
    "Read food labels to understand what you're consuming.",
    "Eating slowly helps with digestion and can prevent overeating.",
];

/// Pick one tip at random.
pub fn random_tip() -> &'static str {
    DAILY_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DAILY_TIPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tip_comes_from_table() {
        for _ in 0..20 {
            assert!(DAILY_TIPS.contains(&random_tip()));
        }
    }
}
