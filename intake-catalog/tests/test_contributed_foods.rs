use intake_catalog::{format_entry_literal, load_catalog_csv, merge_catalogs, parse_entry_literals};
use intake_core::{FoodCatalog, analyze_items, parse_food_input};
use std::path::PathBuf;

fn foods_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("foods.csv")
}

/// Foods unknown to the builtin catalog are picked up once the repo CSV is merged.
#[test]
fn test_repo_csv_fills_unmatched_names() {
    let items = parse_food_input("燕麦50，牛奶250，苹果");

    let before = analyze_items(&items, FoodCatalog::builtin());
    assert_eq!(before.unmatched, vec!["燕麦".to_string(), "牛奶".to_string()]);

    let catalog = merge_catalogs(FoodCatalog::builtin(), &[foods_path()]).unwrap();
    let after = analyze_items(&items, &catalog);
    assert!(after.unmatched.is_empty());
    // 194.5 + 162.5 + 53
    assert!((after.totals.total_energy - 410.0).abs() < 1e-9);
}

/// A pasted contribution snippet can be merged and used straight away.
#[test]
fn test_snippet_into_catalog() {
    let entries = load_catalog_csv(foods_path()).unwrap();
    let snippet: String = entries
        .iter()
        .map(|e| format_entry_literal(e) + "\n")
        .collect();

    let parsed = parse_entry_literals(&snippet).unwrap();
    assert_eq!(parsed.len(), entries.len());

    let catalog = FoodCatalog::builtin().extend(parsed);
    let report = analyze_items(&parse_food_input("香蕉120"), &catalog);
    assert!((report.totals.total_energy - 93.0 * 1.2).abs() < 1e-9);
}
