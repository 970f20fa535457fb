//! intake-catalog: catalog CSV files and contribution snippets

pub mod contribution;
pub mod csv_catalog;

pub use contribution::{
    format_entry_literal, parse_entry_literal, parse_entry_literals, ratio_sum_warning,
};
pub use csv_catalog::{load_catalog_csv, merge_catalogs, read_catalog_csv};
