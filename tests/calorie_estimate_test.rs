use nutritrack_rs::planner::{calorie_modifier, estimate_calories};

#[test]
fn test_empty_name_is_fixed_default() {
    for _ in 0..20 {
        assert_eq!(estimate_calories(""), 350);
    }
}

#[test]
fn test_beef_estimate_range() {
    // base 250..=749 at 1.2x rounds into 300..=899
    for _ in 0..200 {
        let cal = estimate_calories("Beef Stew");
        assert!((300..=899).contains(&cal), "out of range: {}", cal);
    }
}

#[test]
fn test_cake_estimate_range() {
    // base 250..=749 at 1.5x rounds into 375..=1124
    for _ in 0..200 {
        let cal = estimate_calories("Chocolate Cake");
        assert!((375..=1124).contains(&cal), "out of range: {}", cal);
    }
}

#[test]
fn test_salad_estimate_range() {
    // base 250..=749 at 0.7x rounds into 175..=524
    for _ in 0..200 {
        let cal = estimate_calories("Greek Salad");
        assert!((175..=524).contains(&cal), "out of range: {}", cal);
    }
}

#[test]
fn test_unmatched_name_uses_neutral_modifier() {
    for _ in 0..200 {
        let cal = estimate_calories("Shakshuka");
        assert!((250..=749).contains(&cal), "out of range: {}", cal);
    }
}

#[test]
fn test_first_matching_rule_wins() {
    assert_eq!(calorie_modifier("Vegetable Beef Pie"), 0.7);
    assert_eq!(calorie_modifier("Beef and Mustard Pie"), 1.2);
    assert_eq!(calorie_modifier("Chicken Pasta Bake"), 1.0);
}
