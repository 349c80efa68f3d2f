//! Rule-based lifestyle recommendations
//!
//! A pure function over aggregated raw inputs across conditions (not risk
//! scores). Six signals each contribute fixed advisory strings; within a
//! signal the weaker tier only fires if the stronger one did not, while
//! signals are independent of each other.

use crate::error::Result;
use crate::ml::encoders::numeric_field;
use crate::models::{RawInput, RecommendationResult, RiskLevel};
use serde::Deserialize;

pub const DO_COMPLEX_CARBS: &str =
    "Prioritize complex carbs (oats, quinoa) over refined sugars.";
pub const DO_POST_MEAL_WALK: &str =
    "Take a 15-minute walk after meals to stabilize blood sugar.";
pub const DO_MONITOR_CARBS: &str = "Monitor carbohydrate intake to prevent spikes.";
pub const DO_AEROBIC_ACTIVITY: &str =
    "Aim for 150 minutes of moderate aerobic activity weekly.";
pub const DO_STRENGTH_TRAINING: &str = "Incorporate strength training 2x a week.";
pub const DO_SOLUBLE_FIBER: &str =
    "Increase soluble fiber intake (beans, lentils, fruits).";
pub const DO_HEALTHY_FATS: &str = "Choose healthy fats like olive oil and avocados.";
pub const DO_REDUCE_SODIUM: &str = "Reduce sodium intake to under 2,300mg daily.";
pub const DO_BREATHING_EXERCISES: &str = "Practice daily breathing exercises.";
pub const DO_MINDFULNESS: &str =
    "Dedicate 10 minutes daily to mindfulness or meditation.";
pub const DO_SLEEP_SCHEDULE: &str =
    "Establish a consistent sleep schedule (same bed/wake time).";
pub const DO_FALLBACK_DIET: &str = "Maintain a balanced diet rich in vegetables.";
pub const DO_FALLBACK_HYDRATION: &str =
    "Stay hydrated with at least 8 glasses of water daily.";

pub const AVOID_SUGARY_DRINKS: &str = "Sugary drinks and processed snacks.";
pub const AVOID_SEDENTARY: &str =
    "Sedentary behavior for more than 1 hour at a time.";
pub const AVOID_SATURATED_FATS: &str = "Saturated fats (red meat, full-fat dairy).";
pub const AVOID_CAFFEINE_ALCOHOL: &str = "Excessive caffeine and alcohol.";
pub const AVOID_SCREEN_TIME: &str = "Screen time 1 hour before bed.";
pub const AVOID_HEAVY_MEALS: &str = "Heavy meals before bedtime.";
pub const AVOID_FALLBACK: &str = "Smoking and excessive alcohol consumption.";

/// Maximum entries per advice list
const MAX_ADVICE: usize = 4;

/// Aggregated raw inputs, each sub-object independently optional
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RecommendationInput {
    #[serde(default)]
    pub diabetes: Option<RawInput>,

    #[serde(default)]
    pub heart: Option<RawInput>,

    #[serde(default)]
    pub mental: Option<RawInput>,

    /// Accepted by the interface but currently has no effect on advice or
    /// category. Known gap, kept deliberately.
    #[serde(default)]
    pub liver: Option<RawInput>,
}

/// Generate lifestyle advice and an overall category from raw inputs
pub fn generate(input: &RecommendationInput) -> Result<RecommendationResult> {
    let empty = RawInput::new();
    let diabetes = input.diabetes.as_ref().unwrap_or(&empty);
    let heart = input.heart.as_ref().unwrap_or(&empty);
    let mental = input.mental.as_ref().unwrap_or(&empty);

    let glucose = numeric_field(diabetes, "Glucose", 0.0)?;
    let bmi = numeric_field(diabetes, "BMI", 0.0)?;
    let cholesterol = numeric_field(heart, "chol", 0.0)?;
    let bp = numeric_field(heart, "trestbps", 0.0)?;
    let stress = numeric_field(mental, "stress_level", 0.0)?;
    // "No data" is treated as "no sleep problem"; this asymmetric default
    // is part of the contract.
    let sleep = numeric_field(mental, "sleep_quality", 10.0)?;

    let mut do_list: Vec<String> = Vec::new();
    let mut avoid_list: Vec<String> = Vec::new();

    // Metabolic signals
    if glucose > 120.0 {
        push_unique(&mut do_list, DO_COMPLEX_CARBS);
        push_unique(&mut do_list, DO_POST_MEAL_WALK);
        push_unique(&mut avoid_list, AVOID_SUGARY_DRINKS);
    } else if glucose > 100.0 {
        push_unique(&mut do_list, DO_MONITOR_CARBS);
    }

    if bmi > 30.0 {
        push_unique(&mut do_list, DO_AEROBIC_ACTIVITY);
        push_unique(&mut avoid_list, AVOID_SEDENTARY);
    } else if bmi > 25.0 {
        push_unique(&mut do_list, DO_STRENGTH_TRAINING);
    }

    // Cardiovascular signals
    if cholesterol > 240.0 {
        push_unique(&mut do_list, DO_SOLUBLE_FIBER);
        push_unique(&mut avoid_list, AVOID_SATURATED_FATS);
    } else if cholesterol > 200.0 {
        push_unique(&mut do_list, DO_HEALTHY_FATS);
    }

    if bp > 130.0 {
        push_unique(&mut do_list, DO_REDUCE_SODIUM);
        push_unique(&mut do_list, DO_BREATHING_EXERCISES);
        push_unique(&mut avoid_list, AVOID_CAFFEINE_ALCOHOL);
    }

    // Mental health signals
    if stress > 7.0 {
        push_unique(&mut do_list, DO_MINDFULNESS);
        push_unique(&mut avoid_list, AVOID_SCREEN_TIME);
    }

    if sleep < 6.0 {
        push_unique(&mut do_list, DO_SLEEP_SCHEDULE);
        push_unique(&mut avoid_list, AVOID_HEAVY_MEALS);
    }

    if do_list.is_empty() {
        push_unique(&mut do_list, DO_FALLBACK_DIET);
        push_unique(&mut do_list, DO_FALLBACK_HYDRATION);
    }
    if avoid_list.is_empty() {
        push_unique(&mut avoid_list, AVOID_FALLBACK);
    }

    do_list.truncate(MAX_ADVICE);
    avoid_list.truncate(MAX_ADVICE);

    let high_risk =
        glucose > 140.0 || bp > 140.0 || cholesterol > 240.0 || stress > 8.0;
    let moderate_risk = glucose > 110.0 || bp > 130.0 || cholesterol > 200.0;

    let category = if high_risk {
        RiskLevel::High
    } else if moderate_risk {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    Ok(RecommendationResult {
        category,
        do_list,
        avoid_list,
    })
}

/// Stable dedup: first-seen order is preserved
fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
