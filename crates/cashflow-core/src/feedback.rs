use cashflow_domain::Feedback;

/// Above this many shock events per month irregular spending is the main concern.
pub const IRREGULAR_PROBABILITY_THRESHOLD: f64 = 0.3;
/// Growth over the horizon, as a share of the start, that counts as on track.
pub const ON_TRACK_GROWTH_RATIO: f64 = 0.1;

/// Ordered decision list over projection outputs; the first matching rule wins.
pub struct FeedbackClassifier;

impl FeedbackClassifier {
    pub fn classify(
        regular_monthly_net: f64,
        event_probability_per_month: f64,
        projection_points: &[f64],
        initial_total_assets: f64,
    ) -> Feedback {
        let final_amount = projection_points
            .last()
            .copied()
            .unwrap_or(initial_total_assets);
        let growth = final_amount - initial_total_assets;

        if regular_monthly_net < 0.0 {
            Feedback::BaselineDeficit
        } else if event_probability_per_month > IRREGULAR_PROBABILITY_THRESHOLD {
            Feedback::IrregularSpending
        } else if growth > ON_TRACK_GROWTH_RATIO * initial_total_assets {
            Feedback::OnTrack
        } else {
            Feedback::Flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deficit_wins_over_everything_else() {
        let verdict = FeedbackClassifier::classify(-500.0, 0.9, &[1000.0, 50_000.0], 1000.0);
        assert_eq!(verdict, Feedback::BaselineDeficit);
    }

    #[test]
    fn frequent_shocks_come_second() {
        let verdict = FeedbackClassifier::classify(100.0, 0.31, &[1000.0, 50_000.0], 1000.0);
        assert_eq!(verdict, Feedback::IrregularSpending);
        let boundary = FeedbackClassifier::classify(100.0, 0.3, &[1000.0, 1000.0], 1000.0);
        assert_eq!(boundary, Feedback::Flat);
    }

    #[test]
    fn growth_above_ten_percent_is_on_track() {
        assert_eq!(
            FeedbackClassifier::classify(100.0, 0.0, &[1000.0, 1101.0], 1000.0),
            Feedback::OnTrack
        );
        assert_eq!(
            FeedbackClassifier::classify(100.0, 0.0, &[1000.0, 1100.0], 1000.0),
            Feedback::Flat
        );
    }

    #[test]
    fn zero_start_compares_against_zero() {
        assert_eq!(
            FeedbackClassifier::classify(0.0, 0.0, &[0.0, 5.0], 0.0),
            Feedback::OnTrack
        );
        assert_eq!(
            FeedbackClassifier::classify(0.0, 0.0, &[0.0, 0.0], 0.0),
            Feedback::Flat
        );
    }

    #[test]
    fn negative_start_still_classifies() {
        let verdict = FeedbackClassifier::classify(10.0, 0.0, &[-1000.0, -940.0], -1000.0);
        assert_eq!(verdict, Feedback::OnTrack);
    }
}
