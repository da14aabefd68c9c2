//! Flavor score vector

use serde::{Deserialize, Serialize};

/// Upper bound of every flavor axis.
pub const MAX_SCORE: f64 = 5.0;

/// One axis of the flavor profile, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorAxis {
    Acidity,
    Bitterness,
    Body,
    Aroma,
    Sweetness,
}

impl FlavorAxis {
    /// All axes in the order they are laid out around the chart.
    pub const ALL: [FlavorAxis; 5] = [
        FlavorAxis::Acidity,
        FlavorAxis::Bitterness,
        FlavorAxis::Body,
        FlavorAxis::Aroma,
        FlavorAxis::Sweetness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlavorAxis::Acidity => "acidity",
            FlavorAxis::Bitterness => "bitterness",
            FlavorAxis::Body => "body",
            FlavorAxis::Aroma => "aroma",
            FlavorAxis::Sweetness => "sweetness",
        }
    }

    /// Label drawn next to the axis.
    pub fn label(&self) -> &'static str {
        match self {
            FlavorAxis::Acidity => "酸味",
            FlavorAxis::Bitterness => "苦味",
            FlavorAxis::Body => "コク",
            FlavorAxis::Aroma => "香り",
            FlavorAxis::Sweetness => "甘み",
        }
    }
}

impl std::fmt::Display for FlavorAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Five-axis flavor profile of a bean.
///
/// Values are stored as loaded; clamping to `[0, MAX_SCORE]` happens at
/// render time. Missing axes deserialize as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreVector {
    pub acidity: f64,
    pub bitterness: f64,
    pub body: f64,
    pub aroma: f64,
    pub sweetness: f64,
}

impl ScoreVector {
    pub fn new(acidity: f64, bitterness: f64, body: f64, aroma: f64, sweetness: f64) -> Self {
        Self {
            acidity,
            bitterness,
            body,
            aroma,
            sweetness,
        }
    }

    /// Raw stored value of an axis
    pub fn get(&self, axis: FlavorAxis) -> f64 {
        match axis {
            FlavorAxis::Acidity => self.acidity,
            FlavorAxis::Bitterness => self.bitterness,
            FlavorAxis::Body => self.body,
            FlavorAxis::Aroma => self.aroma,
            FlavorAxis::Sweetness => self.sweetness,
        }
    }

    /// Value of an axis clamped to `[0, MAX_SCORE]`; NaN reads as 0.
    pub fn clamped(&self, axis: FlavorAxis) -> f64 {
        let v = self.get(axis);
        if v.is_nan() { 0.0 } else { v.clamp(0.0, MAX_SCORE) }
    }

    /// Clamped values in chart order
    pub fn clamped_values(&self) -> [f64; 5] {
        FlavorAxis::ALL.map(|axis| self.clamped(axis))
    }
}
