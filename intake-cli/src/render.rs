//! Plain-text rendering of results for the terminal.

use intake_catalog::ratio_sum_warning;
use intake_core::{EnergyBudget, FoodCatalog, NutritionReport};
use std::fmt::Write;

pub fn render_analysis(report: &NutritionReport, precision: usize) -> String {
    let t = &report.totals;
    let p = precision;
    let mut s = String::new();

    s.push_str("# Intake\n");
    let _ = writeln!(s, "Total energy:   {:.p$} kcal", t.total_energy);
    let _ = writeln!(s, "Carbohydrate:   {:.p$} kcal", t.carb_energy);
    let _ = writeln!(s, "Fat:            {:.p$} kcal", t.fat_energy);
    let _ = writeln!(s, "Protein:        {:.p$} kcal", t.protein_energy);
    let _ = writeln!(s, "Carb:protein:   {:.p$}", t.carb_to_protein_ratio);
    let _ = writeln!(s, "Carb:fat:       {:.p$}", t.carb_to_fat_ratio);

    if !report.contributions.is_empty() {
        s.push_str("\n# Items\n");
        for c in &report.contributions {
            let _ = writeln!(
                s,
                "- {} {}g/ml: {:.p$} kcal (carb {:.p$}, fat {:.p$}, protein {:.p$})",
                c.name, c.quantity, c.energy, c.carb_energy, c.fat_energy, c.protein_energy
            );
        }
    }

    if report.has_unmatched() {
        s.push_str("\n# Not in catalog (not counted)\n");
        for name in &report.unmatched {
            let _ = writeln!(s, "- {}", name);
        }
    }

    s
}

pub fn render_budget(budget: &EnergyBudget, precision: usize) -> String {
    let p = precision;
    let mut s = String::new();

    s.push_str("# Energy budget\n");
    let _ = writeln!(s, "BMR:            {:.p$} kcal", budget.bmr);
    let _ = writeln!(
        s,
        "TDEE:           {:.p$} kcal (x{} activity)",
        budget.tdee,
        budget.tier.multiplier()
    );
    let _ = writeln!(s, "Target ({}): {:.p$} kcal", budget.goal, budget.target_energy);
    match budget.remaining_energy {
        Some(r) => {
            let _ = writeln!(s, "Remaining:      {:.p$} kcal", r);
        }
        None => s.push_str("Remaining:      n/a (no food entered)\n"),
    }

    s
}

pub fn render_catalog(catalog: &FoodCatalog) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{} foods (kcal per 100 g/ml; carb / protein / fat energy ratios)",
        catalog.len()
    );
    for e in catalog.entries() {
        let _ = write!(
            s,
            "- {}: {} kcal, {:.2} / {:.2} / {:.2}",
            e.name, e.energy_per_100, e.carb_ratio, e.protein_ratio, e.fat_ratio
        );
        if let Some(w) = ratio_sum_warning(e) {
            let _ = write!(s, "  [warning: {}]", w);
        }
        s.push('\n');
    }
    s
}
