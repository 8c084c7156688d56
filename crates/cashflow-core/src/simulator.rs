//! Single-path Monte-Carlo projection of total net worth.

use cashflow_domain::{RegularFlowProfile, ShockProfile};

use crate::random::RandomSource;

/// Annual growth assumed when the user holds investments.
pub const INVESTED_ANNUAL_RATE: f64 = 0.04;
/// Annual growth assumed for cash-only users.
pub const CASH_ANNUAL_RATE: f64 = 0.001;
/// Shocks are scaled by a uniform factor in
/// `[SHOCK_JITTER_FLOOR, SHOCK_JITTER_FLOOR + SHOCK_JITTER_SPAN)`.
pub const SHOCK_JITTER_FLOOR: f64 = 0.8;
pub const SHOCK_JITTER_SPAN: f64 = 0.4;

/// Compounding rate applied to positive balances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRate {
    annual: f64,
}

impl GrowthRate {
    pub fn annual(annual: f64) -> Self {
        Self { annual }
    }

    /// 4% with a positive holdings valuation, 0.1% otherwise.
    pub fn for_holdings(holdings_value: f64) -> Self {
        if holdings_value > 0.0 {
            Self::annual(INVESTED_ANNUAL_RATE)
        } else {
            Self::annual(CASH_ANNUAL_RATE)
        }
    }

    pub fn annual_rate(self) -> f64 {
        self.annual
    }

    pub fn monthly_rate(self) -> f64 {
        self.annual / 12.0
    }
}

/// Everything the simulator needs for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    pub initial_total_assets: f64,
    pub regular: RegularFlowProfile,
    pub shock: ShockProfile,
    pub growth: GrowthRate,
    pub horizon_months: u32,
}

/// State at the end of one simulated month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedMonth {
    /// 1-based month offset from the start.
    pub month: u32,
    /// Shock subtracted this month, zero when none fired.
    pub shock: f64,
    /// Unfloored running net worth.
    pub assets: f64,
}

pub struct ProjectionSimulator;

impl ProjectionSimulator {
    /// Floored trajectory of `horizon_months + 1` points, index 0 being the start.
    pub fn simulate<R>(inputs: &SimulationInputs, rng: &mut R) -> Vec<f64>
    where
        R: RandomSource + ?Sized,
    {
        let mut points = Vec::with_capacity(inputs.horizon_months as usize + 1);
        points.push(inputs.initial_total_assets.floor());
        points.extend(
            Self::simulate_months(inputs, rng)
                .into_iter()
                .map(|month| month.assets.floor()),
        );
        points
    }

    /// Month-by-month detail of one sample path.
    ///
    /// Each month consumes one draw to decide whether a shock fires and a
    /// second draw for its jitter when it does.
    pub fn simulate_months<R>(inputs: &SimulationInputs, rng: &mut R) -> Vec<SimulatedMonth>
    where
        R: RandomSource + ?Sized,
    {
        let monthly_rate = inputs.growth.monthly_rate();
        let mut assets = inputs.initial_total_assets;
        let mut months = Vec::with_capacity(inputs.horizon_months as usize);

        for month in 1..=inputs.horizon_months {
            assets += inputs.regular.monthly_net;

            let mut shock = 0.0;
            let draw = rng.next_uniform();
            if draw < inputs.shock.event_probability_per_month
                && inputs.shock.average_event_magnitude > 0.0
            {
                let jitter = SHOCK_JITTER_FLOOR + SHOCK_JITTER_SPAN * rng.next_uniform();
                shock = inputs.shock.average_event_magnitude * jitter;
                assets -= shock;
            }

            // Debt is never compounded.
            if assets > 0.0 {
                assets *= 1.0 + monthly_rate;
            }

            months.push(SimulatedMonth {
                month,
                shock,
                assets,
            });
        }
        months
    }

    /// Constant trajectory used when there is no history to learn from.
    pub fn flat(initial_total_assets: f64, horizon_months: u32) -> Vec<f64> {
        vec![initial_total_assets.floor(); horizon_months as usize + 1]
    }
}
