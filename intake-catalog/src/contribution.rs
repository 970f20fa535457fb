//! Catalog contribution snippets.
//!
//! New foods are shared with maintainers as one line each, in the order
//! energy, carb, protein, fat:
//!
//!   "酸黄瓜": [11, 0.74, 0.11, 0.15],
//!
//! These helpers format such a line from an entry and read one back so a
//! received snippet can be checked before it is merged.

use anyhow::{Context, Result, bail};
use intake_core::FoodEntry;
use regex::Regex;

/// Ratio sums outside this range get flagged
const RATIO_SUM_TOLERANCE: f64 = 0.1;

/// Format an entry as a contribution line. Numbers are written exactly, so
/// [`parse_entry_literal`] reads back the same entry.
pub fn format_entry_literal(entry: &FoodEntry) -> String {
    format!(
        "\"{}\": [{}, {}, {}, {}],",
        entry.name, entry.energy_per_100, entry.carb_ratio, entry.protein_ratio, entry.fat_ratio
    )
}

/// Parse a contribution line back into an entry. The trailing comma is optional.
pub fn parse_entry_literal(line: &str) -> Result<FoodEntry> {
    let literal_re = Regex::new(concat!(
        r#"^\s*"(?P<name>[^"]+)"\s*:\s*\[\s*"#,
        r"(?P<energy>[\d.]+)\s*,\s*",
        r"(?P<carb>[\d.]+)\s*,\s*",
        r"(?P<protein>[\d.]+)\s*,\s*",
        r"(?P<fat>[\d.]+)\s*\]\s*,?\s*$"
    ))?;

    let Some(caps) = literal_re.captures(line) else {
        bail!("not a catalog entry line: {}", line.trim());
    };

    let field = |key: &str| -> Result<f64> {
        caps[key]
            .parse::<f64>()
            .with_context(|| format!("{} is not a number: {}", key, &caps[key]))
    };

    Ok(FoodEntry::new(
        caps["name"].trim(),
        field("energy")?,
        field("carb")?,
        field("protein")?,
        field("fat")?,
    ))
}

/// Parse every non-blank line of a pasted snippet.
pub fn parse_entry_literals(text: &str) -> Result<Vec<FoodEntry>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_entry_literal(l).with_context(|| format!("line {}", i + 1)))
        .collect()
}

/// Human-readable warning when ratios look off (sum far from 1, or a ratio
/// above 1).
pub fn ratio_sum_warning(entry: &FoodEntry) -> Option<String> {
    let ratios = [entry.carb_ratio, entry.protein_ratio, entry.fat_ratio];
    if ratios.iter().any(|r| *r > 1.0) {
        return Some(format!("{}: a macronutrient ratio is above 1", entry.name));
    }

    let sum = entry.ratio_sum();
    if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
        return Some(format!("{}: ratios sum to {:.2}, expected about 1", entry.name, sum));
    }
    None
}
