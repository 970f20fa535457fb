use intake_core::{
    BodyProfile, DEFAULT_HEIGHT_CM, EnergyBudget, FoodCatalog, FoodEntry, Goal, analyze_items,
    calculate_bmr_tdee, calculate_nutrition, calculate_target_calories, parse_food_input,
};
use std::sync::Arc;
use std::thread;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Full day: text in, totals out, then a budget against those totals.
#[test]
fn test_text_to_remaining_energy() {
    let items = parse_food_input("和牛汉堡肉200，煮鸡蛋100，全麦吐司60，苹果");
    assert_eq!(items.len(), 4);

    let totals = calculate_nutrition(&items, FoodCatalog::builtin());
    // 464 + 143 + 153 + 53
    assert!(approx(totals.total_energy, 813.0), "got {}", totals.total_energy);

    let bmr = calculate_bmr_tdee(25, 60.0, 3, DEFAULT_HEIGHT_CM).unwrap();
    let target = calculate_target_calories(bmr.tdee, "减重");
    assert!(approx(target, bmr.tdee - 500.0));

    let profile = BodyProfile::new(25, 60.0, 3);
    let budget = EnergyBudget::compute(&profile, Goal::Lose, Some(&totals)).unwrap();
    assert!(approx(budget.target_energy, target));
    assert!(approx(budget.remaining_energy.unwrap(), target - 813.0));
}

/// Macro energies follow the catalog ratios, so they add back up to the total
/// when every ratio row sums to 1.
#[test]
fn test_macro_split_adds_up() {
    let items = parse_food_input("香煎鸡胸肉150，洋葱80，酸黄瓜30");
    let t = calculate_nutrition(&items, FoodCatalog::builtin());
    assert!(approx(t.carb_energy + t.protein_energy + t.fat_energy, t.total_energy));
    assert!(t.carb_to_protein_ratio > 0.0);
    assert!(t.carb_to_fat_ratio > 0.0);
}

#[test]
fn test_unknown_foods_surface_as_diagnostics() {
    let items = parse_food_input("苹果，奶茶500，煮鸡蛋50，200");
    let report = analyze_items(&items, FoodCatalog::builtin());

    assert_eq!(report.contributions.len(), 2);
    assert_eq!(report.unmatched, vec!["奶茶".to_string(), "200".to_string()]);
    assert!(approx(report.totals.total_energy, 53.0 + 71.5));
}

/// One catalog shared across threads without locking.
#[test]
fn test_shared_catalog_across_threads() {
    let oats = FoodEntry::new("燕麦", 389.0, 0.66, 0.17, 0.17);
    let catalog = Arc::new(FoodCatalog::builtin().with_entry(oats));

    let handles: Vec<_> = (1..=4u32)
        .map(|n| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let items = parse_food_input(&format!("燕麦{}", n * 25));
                calculate_nutrition(&items, &catalog).total_energy
            })
        })
        .collect();

    let energies: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, e) in energies.iter().enumerate() {
        let grams = (i as f64 + 1.0) * 25.0;
        assert!(approx(*e, 389.0 * grams / 100.0));
    }
}

#[test]
fn test_totals_serialize_to_json() {
    let totals = calculate_nutrition(&parse_food_input("苹果200"), FoodCatalog::builtin());
    let json = serde_json::to_value(totals).unwrap();
    assert_eq!(json["total_energy"], 106.0);
    assert!(json.get("carb_to_protein_ratio").is_some());
}
