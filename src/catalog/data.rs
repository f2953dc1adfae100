use crate::models::{Meal, MealType};

const fn meal(name: &'static str, meal_type: MealType, vegetarian: bool) -> Meal {
    Meal {
        name,
        meal_type,
        vegetarian,
    }
}

use MealType::{Breakfast, Lunch};

/// The built-in meal catalog.
///
/// Only Breakfast and Lunch entries exist; dinner and snack plan sections
/// draw from the Lunch pool.
pub static MEAL_CATALOG: &[Meal] = &[
    meal("Apple Frangipan Tart", Lunch, false),
    meal("Apple & Blackberry Crumble", Lunch, true),
    meal("Apam balik", Lunch, false),
    meal("Ayam Percik", Lunch, false),
    meal("Bakewell tart", Lunch, false),
    meal("Bread and Butter Pudding", Lunch, false),
    meal("Beef Wellington", Lunch, false),
    meal("Baingan Bharta", Lunch, true),
    meal("Beef Brisket Pot Roast", Lunch, false),
    meal("Beef Sunday Roast", Lunch, false),
    meal("Braised Beef Chilli", Lunch, false),
    meal("Beef stroganoff", Lunch, false),
    meal("Broccoli & Stilton soup", Lunch, true),
    meal("Bean & Sausage Hotpot", Lunch, true),
    meal("Banana Pancakes", Breakfast, false),
    meal("Beef Dumpling Stew", Lunch, false),
    meal("Beef and Mustard Pie", Lunch, false),
    meal("Beef and Oyster pie", Lunch, false),
    meal("Blackberry Fool", Lunch, true),
    meal("Battenberg Cake", Lunch, false),
    meal("Beef Bourguignon", Lunch, false),
    meal("Brie wrapped in prosciutto & brioche", Lunch, false),
    meal("Boulangère Potatoes", Lunch, true),
    meal("BeaverTails", Lunch, false),
    meal("Brown Stew Chicken", Lunch, false),
    meal("Beef Lo Mein", Lunch, false),
    meal("Baked salmon with fennel & tomatoes", Lunch, false),
    meal("Budino Di Ricotta", Lunch, false),
    meal("Breakfast Potatoes", Breakfast, false),
    meal("Bitterballen (Dutch meatballs)", Lunch, false),
    meal("BBQ Pork Sloppy Joes", Lunch, false),
    meal(
        "Beef Banh Mi Bowls with Sriracha Mayo, Carrot & Pickled Cucumber",
        Lunch,
        false,
    ),
    meal("Big Mac", Lunch, false),
    meal("Bigos (Hunters Stew)", Lunch, false),
    meal("Boxty Breakfast", Breakfast, false),
    meal("Beef Rendang", Lunch, false),
    meal("Burek", Lunch, false),
    meal("Beef Mechado", Lunch, false),
    meal("Bistek", Lunch, false),
    meal("Beef Caldereta", Lunch, false),
    meal("Beef Asado", Lunch, false),
    meal("Bread omelette", Breakfast, false),
    meal("Beetroot Soup (Borscht)", Lunch, false),
    meal("Blini Pancakes", Breakfast, false),
    meal("Chicken Enchilada Casserole", Lunch, false),
    meal("Chocolate Gateau", Lunch, false),
    meal("Cream Cheese Tart", Lunch, false),
    meal("Christmas Pudding Flapjack", Lunch, true),
    meal("Chicken Handi", Lunch, false),
    meal("Dal fry", Lunch, true),
    meal("Dundee cake", Lunch, false),
    meal("Duck Confit", Lunch, true),
    meal("English Breakfast", Breakfast, false),
    meal("Full English Breakfast", Breakfast, false),
    meal("French Omelette", Breakfast, false),
    meal("Fruit and Cream Cheese Breakfast Pastries", Breakfast, true),
    meal("Pancakes", Breakfast, false),
    meal("Polskie Nalesniki (Polish Pancakes)", Breakfast, false),
    meal("Shakshuka", Lunch, false),
    meal("Vegan Lasagna", Lunch, true),
    meal("Vegetarian Casserole", Lunch, true),
    meal("Vegetarian Chilli", Lunch, true),
    meal("Vegetable Shepherds Pie", Lunch, true),
];
