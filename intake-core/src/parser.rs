//! Free-text food input parsing.
//!
//! Input looks like `和牛汉堡肉200，煮鸡蛋100，酸黄瓜`: items separated by the
//! full-width comma, each a food name optionally followed by a quantity in
//! grams (solids) or millilitres (liquids). The unit is never written.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Item separator (U+FF0C FULLWIDTH COMMA)
pub const ITEM_DELIMITER: char = '，';

/// Quantity used when a token carries no trailing digits
pub const DEFAULT_QUANTITY: f64 = 100.0;

// Name must contain at least one non-digit before the trailing ASCII digit run.
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<name>.*?[^0-9])(?P<qty>[0-9]+)$").expect("item regex is hardcoded")
});

/// One food mention from the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub name: String,
    /// Grams or millilitres
    pub quantity: f64,
}

impl ParsedItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token made only of digits has no food name.
    #[error("item {position} (\"{token}\") is a bare number with no food name")]
    NumericOnlyToken { token: String, position: usize },
}

/// Split `text` into food items, preserving order.
///
/// Tokens are trimmed and empty tokens are dropped. A token without a trailing
/// quantity gets [`DEFAULT_QUANTITY`].
///
/// A token that is only digits (`"200"`) does not match the name+quantity
/// pattern. It is kept whole as the name with the default quantity, not
/// turned into an empty name, so it shows up by its text in
/// `NutritionReport::unmatched`. Use [`parse_food_input_strict`] to reject it.
pub fn parse_food_input(text: &str) -> Vec<ParsedItem> {
    tokens(text).map(parse_token).collect()
}

/// Like [`parse_food_input`] but rejects tokens that are only digits.
pub fn parse_food_input_strict(text: &str) -> Result<Vec<ParsedItem>, ParseError> {
    tokens(text)
        .enumerate()
        .map(|(i, token)| {
            if token.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseError::NumericOnlyToken {
                    token: token.to_string(),
                    position: i + 1,
                });
            }
            Ok(parse_token(token))
        })
        .collect()
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn parse_token(token: &str) -> ParsedItem {
    if let Some(caps) = ITEM_RE.captures(token) {
        if let Ok(quantity) = caps["qty"].parse::<f64>() {
            return ParsedItem::new(caps["name"].trim(), quantity);
        }
    }
    ParsedItem::new(token, DEFAULT_QUANTITY)
}
