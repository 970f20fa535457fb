//! Quantity-weighted energy and macronutrient totals.

use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::parser::ParsedItem;

/// Energy totals (kcal) for a set of items, plus two energy ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub total_energy: f64,
    pub carb_energy: f64,
    pub fat_energy: f64,
    pub protein_energy: f64,
    /// carb / protein energy, 0 when there is no protein energy
    pub carb_to_protein_ratio: f64,
    /// carb / fat energy, 0 when there is no fat energy
    pub carb_to_fat_ratio: f64,
}

/// Energy contributed by one matched item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemContribution {
    pub name: String,
    pub quantity: f64,
    pub energy: f64,
    pub carb_energy: f64,
    pub fat_energy: f64,
    pub protein_energy: f64,
}

/// Totals plus the per-item breakdown and the names that had no catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    pub totals: NutritionTotals,
    pub contributions: Vec<ItemContribution>,
    /// Unmatched names, in input order
    pub unmatched: Vec<String>,
}

impl NutritionReport {
    pub fn has_unmatched(&self) -> bool {
        !self.unmatched.is_empty()
    }
}

/// Sum energy over `items` using `catalog`. Unknown names add nothing.
pub fn calculate_nutrition(items: &[ParsedItem], catalog: &FoodCatalog) -> NutritionTotals {
    analyze_items(items, catalog).totals
}

/// Same as [`calculate_nutrition`], keeping per-item contributions and the
/// list of unmatched names.
pub fn analyze_items(items: &[ParsedItem], catalog: &FoodCatalog) -> NutritionReport {
    let mut totals = NutritionTotals::default();
    let mut contributions = Vec::with_capacity(items.len());
    let mut unmatched = Vec::new();

    for item in items {
        let Some(entry) = catalog.lookup(&item.name) else {
            tracing::debug!(name = %item.name, "no catalog entry, skipping");
            unmatched.push(item.name.clone());
            continue;
        };

        let energy = entry.energy_per_100 * item.quantity / 100.0;
        let c = ItemContribution {
            name: item.name.clone(),
            quantity: item.quantity,
            energy,
            carb_energy: energy * entry.carb_ratio,
            fat_energy: energy * entry.fat_ratio,
            protein_energy: energy * entry.protein_ratio,
        };

        totals.total_energy += c.energy;
        totals.carb_energy += c.carb_energy;
        totals.fat_energy += c.fat_energy;
        totals.protein_energy += c.protein_energy;
        contributions.push(c);
    }

    totals.carb_to_protein_ratio = safe_ratio(totals.carb_energy, totals.protein_energy);
    totals.carb_to_fat_ratio = safe_ratio(totals.carb_energy, totals.fat_energy);

    NutritionReport {
        totals,
        contributions,
        unmatched,
    }
}

fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
