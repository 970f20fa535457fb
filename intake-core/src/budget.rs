//! Energy budget: BMR, activity-adjusted TDEE, goal target and what is left.
//!
//! BMR uses the revised Harris-Benedict equation (male coefficients):
//!
//! `bmr = 88.362 + 13.397 × weight_kg + 4.799 × height_cm − 5.677 × age`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::nutrition::NutritionTotals;

/// Height used when the caller does not give one
pub const DEFAULT_HEIGHT_CM: f64 = 168.0;

/// Daily kcal removed (lose) or added (gain) relative to TDEE
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

mod harris_benedict {
    pub const BASE: f64 = 88.362;
    pub const WEIGHT: f64 = 13.397;
    pub const HEIGHT: f64 = 4.799;
    pub const AGE: f64 = 5.677;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
    #[error("height must be a positive number of centimetres, got {0}")]
    InvalidHeight(f64),
}

/// Activity level derived from training days per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityTier {
    /// No training days
    Sedentary,
    /// 1-3 days
    Light,
    /// 4-5 days
    Moderate,
    /// 6+ days
    Active,
}

impl ActivityTier {
    pub fn from_training_days(days: u32) -> Self {
        match days {
            0 => ActivityTier::Sedentary,
            1..=3 => ActivityTier::Light,
            4..=5 => ActivityTier::Moderate,
            _ => ActivityTier::Active,
        }
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityTier::Sedentary => 1.2,
            ActivityTier::Light => 1.375,
            ActivityTier::Moderate => 1.55,
            ActivityTier::Active => 1.725,
        }
    }
}

/// Direction of energy balance.
///
/// Parsing never fails: any unrecognized word is treated as `Maintain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    #[serde(rename = "maintain")]
    Maintain,
    #[serde(rename = "lose")]
    Lose,
    #[serde(rename = "gain")]
    Gain,
}

impl Goal {
    /// Map a user-supplied word to a goal. Accepts the English and Chinese
    /// words (维持 / 减重 / 增重).
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "减重" => Goal::Lose,
            "gain" | "增重" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// kcal added to TDEE for this goal
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::Maintain => 0.0,
            Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
            Goal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }
}

impl FromStr for Goal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Goal::parse_lenient(s))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub training_days: u32,
    pub height_cm: f64,
}

impl BodyProfile {
    pub fn new(age: u32, weight_kg: f64, training_days: u32) -> Self {
        Self {
            age,
            weight_kg,
            training_days,
            height_cm: DEFAULT_HEIGHT_CM,
        }
    }

    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrTdee {
    pub bmr: f64,
    pub tdee: f64,
    pub tier: ActivityTier,
}

/// Compute BMR and TDEE. Weight and height must be finite and positive.
pub fn calculate_bmr_tdee(
    age: u32,
    weight_kg: f64,
    training_days: u32,
    height_cm: f64,
) -> Result<BmrTdee, BudgetError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(BudgetError::InvalidWeight(weight_kg));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BudgetError::InvalidHeight(height_cm));
    }

    let bmr = harris_benedict::BASE
        + harris_benedict::WEIGHT * weight_kg
        + harris_benedict::HEIGHT * height_cm
        - harris_benedict::AGE * f64::from(age);

    let tier = ActivityTier::from_training_days(training_days);
    Ok(BmrTdee {
        bmr,
        tdee: bmr * tier.multiplier(),
        tier,
    })
}

/// Daily target for `goal` given as free text; unknown words mean maintain.
pub fn calculate_target_calories(tdee: f64, goal: &str) -> f64 {
    target_for(tdee, Goal::parse_lenient(goal))
}

pub fn target_for(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.adjustment()
}

/// Full budget for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBudget {
    pub bmr: f64,
    pub tdee: f64,
    pub tier: ActivityTier,
    pub goal: Goal,
    pub target_energy: f64,
    /// `None` when no food was entered
    pub remaining_energy: Option<f64>,
}

impl EnergyBudget {
    /// Remaining energy is only computed when `intake` is given; an empty day
    /// is not reported as "the whole target is left".
    pub fn compute(
        profile: &BodyProfile,
        goal: Goal,
        intake: Option<&NutritionTotals>,
    ) -> Result<Self, BudgetError> {
        let BmrTdee { bmr, tdee, tier } = calculate_bmr_tdee(
            profile.age,
            profile.weight_kg,
            profile.training_days,
            profile.height_cm,
        )?;
        let target_energy = target_for(tdee, goal);

        Ok(Self {
            bmr,
            tdee,
            tier,
            goal,
            target_energy,
            remaining_energy: intake.map(|t| target_energy - t.total_energy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bmr_reference_profile() {
        let r = calculate_bmr_tdee(25, 60.0, 3, DEFAULT_HEIGHT_CM).unwrap();
        let expected = 88.362 + 13.397 * 60.0 + 4.799 * 168.0 - 5.677 * 25.0;
        assert!(approx(r.bmr, expected));
        assert!(approx(r.bmr, 1556.489));
        assert_eq!(r.tier, ActivityTier::Light);
        assert!(approx(r.tdee, expected * 1.375));
    }

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0, 1.2),
            (1, 1.375),
            (3, 1.375),
            (4, 1.55),
            (5, 1.55),
            (6, 1.725),
            (7, 1.725),
        ];
        for (days, multiplier) in cases {
            assert_eq!(
                ActivityTier::from_training_days(days).multiplier(),
                multiplier,
                "training_days={days}"
            );
        }
    }

    #[test]
    fn test_height_override() {
        let default = calculate_bmr_tdee(30, 70.0, 0, DEFAULT_HEIGHT_CM).unwrap();
        let taller = calculate_bmr_tdee(30, 70.0, 0, 178.0).unwrap();
        assert!(approx(taller.bmr - default.bmr, 4.799 * 10.0));
    }

    #[test]
    fn test_rejects_bad_weight_and_height() {
        assert_eq!(
            calculate_bmr_tdee(25, 0.0, 3, 168.0),
            Err(BudgetError::InvalidWeight(0.0))
        );
        assert_eq!(
            calculate_bmr_tdee(25, -5.0, 3, 168.0),
            Err(BudgetError::InvalidWeight(-5.0))
        );
        assert!(matches!(
            calculate_bmr_tdee(25, f64::NAN, 3, 168.0),
            Err(BudgetError::InvalidWeight(_))
        ));
        assert_eq!(
            calculate_bmr_tdee(25, 60.0, 3, 0.0),
            Err(BudgetError::InvalidHeight(0.0))
        );
    }

    #[test]
    fn test_target_calories() {
        assert_eq!(calculate_target_calories(2000.0, "lose"), 1500.0);
        assert_eq!(calculate_target_calories(2000.0, "gain"), 2500.0);
        assert_eq!(calculate_target_calories(2000.0, "maintain"), 2000.0);
        assert_eq!(calculate_target_calories(2000.0, "bulk"), 2000.0);
        assert_eq!(calculate_target_calories(2000.0, ""), 2000.0);
    }

    #[test]
    fn test_goal_words() {
        assert_eq!(Goal::parse_lenient("减重"), Goal::Lose);
        assert_eq!(Goal::parse_lenient("增重"), Goal::Gain);
        assert_eq!(Goal::parse_lenient("维持"), Goal::Maintain);
        assert_eq!(Goal::parse_lenient(" Lose "), Goal::Lose);
        assert_eq!("gain".parse::<Goal>(), Ok(Goal::Gain));
        assert_eq!(Goal::Lose.to_string(), "lose");
    }

    #[test]
    fn test_budget_with_intake() {
        let profile = BodyProfile::new(25, 60.0, 3);
        let intake = NutritionTotals {
            total_energy: 607.0,
            ..Default::default()
        };
        let budget = EnergyBudget::compute(&profile, Goal::Lose, Some(&intake)).unwrap();

        assert!(approx(budget.target_energy, budget.tdee - 500.0));
        let remaining = budget.remaining_energy.unwrap();
        assert!(approx(remaining, budget.target_energy - 607.0));
    }

    #[test]
    fn test_budget_without_intake_has_no_remaining() {
        let profile = BodyProfile::new(40, 80.0, 6).with_height(180.0);
        let budget = EnergyBudget::compute(&profile, Goal::Maintain, None).unwrap();
        assert_eq!(budget.remaining_energy, None);
        assert_eq!(budget.tier, ActivityTier::Active);
        assert_eq!(budget.target_energy, budget.tdee);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_bmr_tdee(33, 72.5, 4, 168.0).unwrap();
        let b = calculate_bmr_tdee(33, 72.5, 4, 168.0).unwrap();
        assert_eq!(a, b);
    }
}
