//! Food catalog: per-100-unit energy and macronutrient energy ratios.
//!
//! A catalog is an immutable value. Callers that want extra foods build a new
//! catalog from an existing one (`with_entry` / `extend`) instead of mutating
//! shared state, so one instance can be handed to any number of threads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// One food in the catalog.
///
/// Ratios are fractions of the food's energy (not of its mass). Source data is
/// not normalized, so the three ratios do not always add up to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    /// kcal per 100 g (solids) or 100 ml (liquids)
    pub energy_per_100: f64,
    pub carb_ratio: f64,
    pub protein_ratio: f64,
    pub fat_ratio: f64,
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        energy_per_100: f64,
        carb_ratio: f64,
        protein_ratio: f64,
        fat_ratio: f64,
    ) -> Self {
        Self {
            name: name.into(),
            energy_per_100,
            carb_ratio,
            protein_ratio,
            fat_ratio,
        }
    }

    /// Sum of the three macronutrient ratios
    pub fn ratio_sum(&self) -> f64 {
        self.carb_ratio + self.protein_ratio + self.fat_ratio
    }
}

/// Reference foods shipped with the calculator: (name, kcal/100, carb, protein, fat).
const BUILTIN_FOODS: &[(&str, f64, f64, f64, f64)] = &[
    ("和牛汉堡肉", 232.0, 0.02, 0.64, 0.34),
    ("香煎鸡胸肉", 128.0, 0.05, 0.72, 0.23),
    ("煮鸡蛋", 143.0, 0.00, 0.34, 0.66),
    ("苹果", 53.0, 0.94, 0.03, 0.03),
    ("洋葱", 40.0, 0.86, 0.10, 0.04),
    ("酸黄瓜", 11.0, 0.74, 0.11, 0.15),
    ("全麦吐司", 255.0, 0.72, 0.12, 0.16),
];

static BUILTIN: LazyLock<FoodCatalog> = LazyLock::new(|| {
    FoodCatalog::from_entries(
        BUILTIN_FOODS.iter().map(|&(name, kcal, carb, protein, fat)| {
            FoodEntry::new(name, kcal, carb, protein, fat)
        }),
    )
});

/// Name-indexed food table, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    entries: Vec<FoodEntry>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference catalog, built once per process.
    pub fn builtin() -> &'static FoodCatalog {
        &BUILTIN
    }

    /// Build a catalog from entries. A repeated name replaces the earlier
    /// entry but keeps its position.
    pub fn from_entries(entries: impl IntoIterator<Item = FoodEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.upsert(entry);
        }
        catalog
    }

    /// Exact match on name (case and whitespace sensitive).
    pub fn lookup(&self, name: &str) -> Option<&FoodEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this catalog with one more (or one replaced) entry.
    pub fn with_entry(&self, entry: FoodEntry) -> Self {
        let mut next = self.clone();
        next.upsert(entry);
        next
    }

    /// Copy of this catalog layered with `entries`.
    pub fn extend(&self, entries: impl IntoIterator<Item = FoodEntry>) -> Self {
        let mut next = self.clone();
        for entry in entries {
            next.upsert(entry);
        }
        next
    }

    fn upsert(&mut self, entry: FoodEntry) {
        match self.index.get(&entry.name) {
            Some(&i) => {
                tracing::debug!(name = %entry.name, "replacing catalog entry");
                self.entries[i] = entry;
            }
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}
