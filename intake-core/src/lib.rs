//! intake-core: food catalog, input parsing, nutrition totals and energy budget

pub mod budget;
pub mod catalog;
pub mod nutrition;
pub mod parser;

pub use budget::{
    ActivityTier, BmrTdee, BodyProfile, BudgetError, DEFAULT_HEIGHT_CM, EnergyBudget, Goal,
    calculate_bmr_tdee, calculate_target_calories,
};
pub use catalog::{FoodCatalog, FoodEntry};
pub use nutrition::{
    ItemContribution, NutritionReport, NutritionTotals, analyze_items, calculate_nutrition,
};
pub use parser::{ParseError, ParsedItem, parse_food_input, parse_food_input_strict};
