//! Presentation of a rigor score: the canned verdict, the certification badge
//! and where the gauge needle sits.

use serde::Serialize;

/// Fixed display domain of the gauge. Scores outside it pin the needle.
pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 1000.0;

/// Lower bounds are inclusive and checked top-down; the first hit wins.
const VERDICTS: [(f64, &str); 6] = [
    (5000.0, "HOLY MOLYYYYyyyy"),
    (100.0, "A solid argument."),
    (0.0, "Kinda rigorous. Just kidding, haha... unless...?"),
    (-10.0, "A weak argument."),
    (-100.0, "Pure hand-waving."),
    (-5000.0, "This proof was left as an exercise for the reader..."),
];

const BELOW_EVERYTHING: &str = "I have discovered a truly marvelous proof of this theorem...";

pub fn verdict(score: f64) -> &'static str {
    VERDICTS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, message)| *message)
        .unwrap_or(BELOW_EVERYTHING)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Certification {
    Rigorous,
    Flimsy,
}

impl Certification {
    /// No badge is awarded strictly between 0 and 100.
    pub fn for_score(score: f64) -> Option<Self> {
        if score >= 100.0 {
            Some(Certification::Rigorous)
        } else if score <= 0.0 {
            Some(Certification::Flimsy)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Certification::Rigorous => "Certified Rigorous",
            Certification::Flimsy => "Certified Flimsy",
        }
    }
}

/// Needle position in `[0, 1]` across the gauge's display domain.
pub fn gauge_fraction(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score.clamp(GAUGE_MIN, GAUGE_MAX) - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN)
}

/// At most two decimals, trailing zeros dropped.
pub fn format_score(score: f64) -> String {
    let fixed = format!("{:.2}", score);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
