//! Value types produced by the projection engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Average monthly net of the recurring (non-extraordinary) cash flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegularFlowProfile {
    pub monthly_net: f64,
}

/// Empirical frequency and size of extraordinary expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockProfile {
    /// Events per month over the lookback; can exceed 1.0 with frequent events.
    pub event_probability_per_month: f64,
    pub average_event_magnitude: f64,
}

/// Verdict attached to every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Recurring spending exceeds recurring income.
    BaselineDeficit,
    /// Baseline is positive but irregular spending holds growth back.
    IrregularSpending,
    /// Net worth grows by more than ten percent over the horizon.
    OnTrack,
    /// Stable but flat trajectory.
    Flat,
    /// Nothing recorded in the lookback window.
    InsufficientData,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::BaselineDeficit => {
                "Warning: your regular spending exceeds your regular income. Even without \
                 one-off expenses your assets shrink every month. Review fixed costs such as \
                 rent and subscriptions."
            }
            Feedback::IrregularSpending => {
                "Analysis: your regular cash flow is positive, but sudden one-off expenses \
                 (hobbies, travel) are slowing your asset growth. Consider budgeting for these \
                 events in advance."
            }
            Feedback::OnTrack => {
                "On track! Steady spending habits and compounding returns put your assets on \
                 a healthy upward curve."
            }
            Feedback::Flat => {
                "Stable, but flat. You can sustain your current lifestyle, but growing your \
                 assets meaningfully requires investing more or increasing income."
            }
            Feedback::InsufficientData => {
                "Not enough data to analyse. Record some transactions first."
            }
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one projection request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    regular_monthly_net: f64,
    horizon_months: u32,
    feedback: Feedback,
    feedback_text: String,
    initial_total_assets: f64,
    projection_points: Vec<f64>,
}

impl PredictionResult {
    pub fn new(
        regular_monthly_net: f64,
        horizon_months: u32,
        feedback: Feedback,
        initial_total_assets: f64,
        projection_points: Vec<f64>,
    ) -> Self {
        Self {
            regular_monthly_net,
            horizon_months,
            feedback,
            feedback_text: feedback.message().to_string(),
            initial_total_assets,
            projection_points,
        }
    }

    pub fn regular_monthly_net(&self) -> f64 {
        self.regular_monthly_net
    }

    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn feedback_text(&self) -> &str {
        &self.feedback_text
    }

    pub fn initial_total_assets(&self) -> f64 {
        self.initial_total_assets
    }

    /// Floored net worth per month, index 0 being the starting point.
    pub fn projection_points(&self) -> &[f64] {
        &self.projection_points
    }

    pub fn final_point(&self) -> Option<f64> {
        self.projection_points.last().copied()
    }
}
