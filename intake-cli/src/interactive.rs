//! Prompt-driven flow: food first, then (optionally) the energy budget.

use anyhow::{Context, Result, bail};
use intake_core::{BodyProfile, EnergyBudget, FoodCatalog, Goal, analyze_items, parse_food_input};
use std::io::{BufRead, Write};

use crate::render::{render_analysis, render_budget};

pub struct Session<'a> {
    pub catalog: &'a FoodCatalog,
    pub height_cm: f64,
    pub precision: usize,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}: ", label)?;
    out.flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        bail!("input closed while waiting for: {}", label);
    }
    Ok(s.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes" | "是")
}

pub fn run_session<R: BufRead, W: Write>(
    session: &Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Daily intake calculator\n")?;
    writeln!(out, "Enter what you ate today, separated by the full-width comma (，).")?;
    writeln!(out, "Add grams (or ml) right after each name; no unit.")?;
    writeln!(out, "Example: 和牛汉堡肉200，煮鸡蛋100")?;
    writeln!(out, "Items without a number count as 100.\n")?;

    let text = prompt(input, out, "Food")?;
    let items = parse_food_input(&text);
    let report = analyze_items(&items, session.catalog);
    writeln!(out, "\n{}", render_analysis(&report, session.precision))?;

    let cont = prompt(input, out, "Continue with calorie targets? (y/n)")?;
    if !is_yes(&cont) {
        writeln!(out, "Done.")?;
        return Ok(());
    }

    let age: u32 = prompt(input, out, "Age")?
        .parse()
        .context("age must be a whole number")?;
    let weight_kg: f64 = prompt(input, out, "Weight (kg)")?
        .parse()
        .context("weight must be a number")?;
    let training_days: u32 = prompt(input, out, "Training days this week")?
        .parse()
        .context("training days must be a whole number")?;
    let goal = Goal::parse_lenient(&prompt(input, out, "Goal (maintain/lose/gain)")?);

    let profile = BodyProfile::new(age, weight_kg, training_days).with_height(session.height_cm);
    let intake = (!items.is_empty()).then_some(&report.totals);
    let budget = EnergyBudget::compute(&profile, goal, intake)?;

    writeln!(out, "\n{}", render_budget(&budget, session.precision))?;
    Ok(())
}
