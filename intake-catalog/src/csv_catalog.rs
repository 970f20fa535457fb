//! Load food catalogs from CSV files.
//!
//! Expected header:
//! name,energy_per_100,carb_ratio,protein_ratio,fat_ratio

use anyhow::{Context, Result, bail};
use intake_core::{FoodCatalog, FoodEntry};
use std::io::Read;
use std::path::Path;

use crate::contribution::ratio_sum_warning;

/// Read catalog entries from a CSV file.
pub fn load_catalog_csv(path: impl AsRef<Path>) -> Result<Vec<FoodEntry>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let entries = read_catalog_csv(file).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded catalog file");
    Ok(entries)
}

/// Read catalog entries from any CSV source. Rows are deserialized by
/// header name; rows without a name are skipped. A bad or negative number is
/// an error naming the line and column.
pub fn read_catalog_csv(reader: impl Read) -> Result<Vec<FoodEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut entries = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.get(0).unwrap_or("").is_empty() {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let entry: FoodEntry = match record.deserialize(Some(&headers)) {
            Ok(entry) => entry,
            Err(e) => {
                let column = bad_column(&e, &headers).unwrap_or("row");
                return Err(anyhow::Error::new(e).context(format!("line {line}: invalid {column}")));
            }
        };
        check_non_negative(&entry, line)?;

        if let Some(warning) = ratio_sum_warning(&entry) {
            tracing::warn!(line, "{}", warning);
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Layer every file in `paths` over `base`, in order.
pub fn merge_catalogs<P: AsRef<Path>>(base: &FoodCatalog, paths: &[P]) -> Result<FoodCatalog> {
    let mut catalog = base.clone();
    for p in paths {
        catalog = catalog.extend(load_catalog_csv(p)?);
    }
    Ok(catalog)
}

fn bad_column<'h>(e: &csv::Error, headers: &'h csv::StringRecord) -> Option<&'h str> {
    match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => headers.get(usize::try_from(err.field()?).ok()?),
        _ => None,
    }
}

fn check_non_negative(entry: &FoodEntry, line: u64) -> Result<()> {
    let fields = [
        ("energy_per_100", entry.energy_per_100),
        ("carb_ratio", entry.carb_ratio),
        ("protein_ratio", entry.protein_ratio),
        ("fat_ratio", entry.fat_ratio),
    ];
    for (column, value) in fields {
        if !value.is_finite() || value < 0.0 {
            bail!(
                "line {line}: {column} for \"{}\" must be a non-negative number, got {value}",
                entry.name
            );
        }
    }
    Ok(())
}
