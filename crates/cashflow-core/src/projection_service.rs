//! Request-to-result orchestration of the projection engine.

use chrono::NaiveDate;
use tracing::{debug, info};

use cashflow_domain::{Feedback, PredictionResult, TransactionRecord};

use crate::{
    feedback::FeedbackClassifier,
    ledger_view::LedgerView,
    lookback::LookbackWindow,
    random::RandomSource,
    regular_flow::RegularFlowEstimator,
    shock_model::ShockModel,
    simulator::{GrowthRate, ProjectionSimulator, SimulationInputs},
    summary_service::SummaryService,
    time::Clock,
    CoreError,
};

pub const DEFAULT_HORIZON_MONTHS: u32 = 12;
pub const MAX_HORIZON_MONTHS: u32 = 600;
/// Upper bound for any configured cap; settings above it are clamped.
pub const HORIZON_CEILING_MONTHS: u32 = 1200;

/// Caller-facing limits for projection requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionSettings {
    pub default_horizon_months: u32,
    pub max_horizon_months: u32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            default_horizon_months: DEFAULT_HORIZON_MONTHS,
            max_horizon_months: MAX_HORIZON_MONTHS,
        }
    }
}

/// Runs the full projection: baseline, shock model, simulation and verdict.
#[derive(Debug, Clone, Default)]
pub struct ProjectionService {
    settings: ProjectionSettings,
}

impl ProjectionService {
    pub fn new(settings: ProjectionSettings) -> Self {
        Self {
            settings: ProjectionSettings {
                max_horizon_months: settings.max_horizon_months.min(HORIZON_CEILING_MONTHS),
                ..settings
            },
        }
    }

    pub fn settings(&self) -> ProjectionSettings {
        self.settings
    }

    /// Rejects non-positive horizons and horizons above the configured cap.
    pub fn validate_horizon(&self, requested: i64) -> Result<u32, CoreError> {
        if requested <= 0 {
            return Err(CoreError::InvalidHorizon(requested));
        }
        let max = self.settings.max_horizon_months.min(HORIZON_CEILING_MONTHS);
        match u32::try_from(requested) {
            Ok(months) if months <= max => Ok(months),
            _ => Err(CoreError::HorizonTooLarge { requested, max }),
        }
    }

    /// Projects net worth `horizon_months` ahead from the given history.
    pub fn project<R>(
        &self,
        transactions: &[TransactionRecord],
        holdings_value: f64,
        horizon_months: i64,
        now: NaiveDate,
        rng: &mut R,
    ) -> Result<PredictionResult, CoreError>
    where
        R: RandomSource + ?Sized,
    {
        let horizon = self.validate_horizon(horizon_months)?;
        let initial_total_assets = SummaryService::total_assets(transactions, holdings_value);

        let window = LookbackWindow::ending_at(now);
        let recent = window.select(transactions);
        debug!(
            cutoff = %window.cutoff,
            records = recent.len(),
            initial_total_assets,
            "projection window selected"
        );

        if recent.is_empty() {
            debug!(horizon, "no records in lookback window; returning flat projection");
            return Ok(PredictionResult::new(
                0.0,
                horizon,
                Feedback::InsufficientData,
                initial_total_assets,
                ProjectionSimulator::flat(initial_total_assets, horizon),
            ));
        }

        let regular = RegularFlowEstimator::estimate(recent.iter().copied());
        let shock = ShockModel::derive(recent.iter().copied());
        let growth = GrowthRate::for_holdings(holdings_value);
        debug!(
            monthly_net = regular.monthly_net,
            event_probability = shock.event_probability_per_month,
            event_magnitude = shock.average_event_magnitude,
            annual_rate = growth.annual_rate(),
            "projection profiles derived"
        );

        let inputs = SimulationInputs {
            initial_total_assets,
            regular,
            shock,
            growth,
            horizon_months: horizon,
        };
        let points = ProjectionSimulator::simulate(&inputs, rng);
        let feedback = FeedbackClassifier::classify(
            regular.monthly_net,
            shock.event_probability_per_month,
            &points,
            initial_total_assets,
        );
        info!(
            horizon,
            final_point = points.last().copied().unwrap_or_default(),
            ?feedback,
            "projection complete"
        );

        Ok(PredictionResult::new(
            regular.monthly_net,
            horizon,
            feedback,
            initial_total_assets,
            points,
        ))
    }

    /// Projects from a [`LedgerView`], using the configured default horizon when none is given.
    pub fn project_view<V, R>(
        &self,
        view: &V,
        horizon_months: Option<i64>,
        clock: &dyn Clock,
        rng: &mut R,
    ) -> Result<PredictionResult, CoreError>
    where
        V: LedgerView + ?Sized,
        R: RandomSource + ?Sized,
    {
        let horizon =
            horizon_months.unwrap_or_else(|| i64::from(self.settings.default_horizon_months));
        self.project(
            view.transactions(),
            view.holdings_value(),
            horizon,
            clock.today(),
            rng,
        )
    }
}
