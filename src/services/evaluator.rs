//! Benchmark evaluation.
//!
//! Looks up the benchmark for each user metric, computes the percentage
//! deviation and derives the recommendation list. Evaluation is a pure
//! function of the submission and the shared, read-only reference table.

use super::errors::BenchmarkError;
use super::thresholds::*;
use crate::models::{
    ComparisonSet, Evaluation, MetricComparison, Priority, Recommendation, RecommendationKind,
    ReferenceTable, Submission,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BenchmarkEvaluator {
    table: Arc<ReferenceTable>,
}

impl BenchmarkEvaluator {
    pub fn new(table: Arc<ReferenceTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn evaluate(&self, submission: &Submission) -> Result<Evaluation, BenchmarkError> {
        let results = self.compare(submission);

        for (label, metric) in results.labelled() {
            if !metric.is_finite() {
                return Err(BenchmarkError::Computation(format!(
                    "{} comparison is not finite: {:?}",
                    label, metric
                )));
            }
        }

        let recommendations = recommend(&results);
        Ok(Evaluation {
            results,
            recommendations,
        })
    }

    fn compare(&self, submission: &Submission) -> ComparisonSet {
        let profile = &submission.profile;
        let category = profile.category_key();
        let region = profile.region_key();
        let plan_type = profile.plan_type_key();

        if category.is_none() || region.is_none() || plan_type.is_none() {
            tracing::warn!(
                category = %profile.category,
                region = %profile.region,
                plan_type = %profile.plan_type,
                "Unknown benchmark key, missing benchmarks compare as 0"
            );
        }

        let table = &self.table;
        ComparisonSet {
            pricing: MetricComparison::new(submission.price, table.price(plan_type, region)),
            conversion: MetricComparison::new(
                submission.conversion_rate,
                table.conversion(category, submission.has_trial),
            ),
            ltv: MetricComparison::new(submission.ltv, table.ltv(category, plan_type)),
            refund: MetricComparison::new(submission.refund_rate, table.refund_rate(category)),
        }
    }
}

/// Every rule is checked on its own; the generic tip always comes last.
pub fn recommend(results: &ComparisonSet) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if results.conversion.diff < CONVERSION_GAP_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Conversion,
            Priority::High,
            format!(
                "Increase your conversion rate by {}% to generate additional monthly revenue",
                results.conversion.diff.abs()
            ),
            "A/B test different trial lengths and paywall designs",
        ));
    }

    if results.pricing.diff < UNDERPRICED_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Pricing,
            Priority::Medium,
            "Consider testing a price increase - market shows tolerance",
            "Test 10-15% price increase with A/B testing",
        ));
    }

    if results.ltv.diff < LTV_GAP_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Retention,
            Priority::High,
            "Review your retention strategies to optimize LTV",
            "Focus on onboarding and feature adoption",
        ));
    }

    if results.refund.diff > REFUND_EXCESS_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Refund,
            Priority::Medium,
            "Your refund rate is above industry average",
            "Review onboarding flow and set proper expectations",
        ));
    }

    recommendations.push(Recommendation::new(
        RecommendationKind::Platform,
        Priority::Low,
        "Track and optimize all these metrics continuously",
        "Schedule a demo to see how automated paywall experiments can improve your metrics",
    ));

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{percent_difference, AppProfile};

    fn evaluator() -> BenchmarkEvaluator {
        BenchmarkEvaluator::new(Arc::new(ReferenceTable::builtin().unwrap()))
    }

    fn submission(category: &str, region: &str, plan_type: &str) -> Submission {
        Submission {
            profile: AppProfile {
                category: category.to_string(),
                region: region.to_string(),
                plan_type: plan_type.to_string(),
            },
            price: 10.0,
            conversion_rate: 1.0,
            ltv: 40.0,
            refund_rate: 3.0,
            has_trial: false,
            email: "founder@example.com".to_string(),
        }
    }

    fn kinds(evaluation: &Evaluation) -> Vec<RecommendationKind> {
        evaluation
            .recommendations
            .iter()
            .map(|rec| rec.kind)
            .collect()
    }

    #[test]
    fn exact_price_match_has_zero_diff() {
        let mut input = submission("Productivity", "US", "monthly");
        input.price = 15.2;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.pricing.benchmark, 15.2);
        assert_eq!(evaluation.results.pricing.diff, 0.0);
    }

    #[test]
    fn trial_apps_compare_against_trial_to_paid_rate() {
        let mut input = submission("Education", "US", "monthly");
        input.has_trial = true;
        input.conversion_rate = 29.31;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.conversion.benchmark, 29.31);
        assert_eq!(evaluation.results.conversion.diff, 0.0);
    }

    #[test]
    fn apps_without_trial_compare_against_install_to_paid_rate() {
        let mut input = submission("Education", "US", "monthly");
        input.conversion_rate = 0.83;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.conversion.benchmark, 0.83);
        assert_eq!(evaluation.results.conversion.diff, 0.0);
    }

    #[test]
    fn high_refund_rate_triggers_refund_recommendation() {
        let mut input = submission("Education", "US", "monthly");
        input.refund_rate = 10.0;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.refund.benchmark, 2.8);
        assert_eq!(evaluation.results.refund.diff, 257.1);

        let refund = evaluation
            .recommendations
            .iter()
            .find(|rec| rec.kind == RecommendationKind::Refund)
            .expect("refund recommendation");
        assert_eq!(refund.priority, Priority::Medium);
    }

    #[test]
    fn unknown_keys_resolve_to_zero_benchmarks() {
        let input = submission("Games", "Antarctica", "daily");

        let evaluation = evaluator().evaluate(&input).unwrap();
        for (_, metric) in evaluation.results.labelled() {
            assert_eq!(metric.benchmark, 0.0);
            assert_eq!(metric.diff, 0.0);
        }
        assert_eq!(kinds(&evaluation), vec![RecommendationKind::Platform]);
    }

    #[test]
    fn partially_known_keys_only_zero_the_affected_metrics() {
        let input = submission("Education", "Antarctica", "monthly");

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.pricing.benchmark, 0.0);
        assert_eq!(evaluation.results.ltv.benchmark, 36.0);
        assert_eq!(evaluation.results.refund.benchmark, 2.8);
    }

    #[test]
    fn all_applicable_rules_fire_in_order() {
        let mut input = submission("Productivity", "US", "monthly");
        input.price = 9.99;
        input.has_trial = true;
        input.conversion_rate = 12.0;
        input.ltv = 20.0;
        input.refund_rate = 6.0;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(
            kinds(&evaluation),
            vec![
                RecommendationKind::Conversion,
                RecommendationKind::Pricing,
                RecommendationKind::Retention,
                RecommendationKind::Refund,
                RecommendationKind::Platform,
            ]
        );

        let priorities: Vec<Priority> = evaluation
            .recommendations
            .iter()
            .map(|rec| rec.priority)
            .collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::Medium,
                Priority::High,
                Priority::Medium,
                Priority::Low,
            ]
        );
    }

    #[test]
    fn conversion_message_states_the_absolute_gap() {
        let mut input = submission("Productivity", "US", "monthly");
        input.has_trial = true;
        input.conversion_rate = 12.0;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.conversion.diff, -48.5);
        assert_eq!(
            evaluation.recommendations[0].message,
            "Increase your conversion rate by 48.5% to generate additional monthly revenue"
        );
    }

    #[test]
    fn whole_number_gaps_print_without_decimals() {
        let mut input = submission("Productivity", "US", "monthly");
        input.has_trial = true;
        input.conversion_rate = 0.0;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.conversion.diff, -100.0);
        assert_eq!(
            evaluation.recommendations[0].message,
            "Increase your conversion rate by 100% to generate additional monthly revenue"
        );
    }

    #[test]
    fn thresholds_are_strict() {
        // exactly -10% conversion and -20% price do not fire
        let mut input = submission("Education", "US", "monthly");
        input.has_trial = false;
        input.conversion_rate = 0.747;
        input.price = 12.16;
        input.ltv = 36.0;
        input.refund_rate = 2.8;

        let evaluation = evaluator().evaluate(&input).unwrap();
        assert_eq!(evaluation.results.conversion.diff, -10.0);
        assert_eq!(evaluation.results.pricing.diff, -20.0);
        assert_eq!(kinds(&evaluation), vec![RecommendationKind::Platform]);
    }

    #[test]
    fn always_includes_the_generic_recommendation() {
        for category in ["Education", "Lifestyle", "Utilities", "Unknown"] {
            let evaluation = evaluator()
                .evaluate(&submission(category, "Europe", "annual"))
                .unwrap();
            let last = evaluation.recommendations.last().unwrap();
            assert_eq!(last.kind, RecommendationKind::Platform);
            assert_eq!(last.priority, Priority::Low);
        }
    }

    #[test]
    fn diffs_follow_the_rounded_formula() {
        let evaluator = evaluator();
        let table = evaluator.table();
        let mut input = submission("Health & Fitness", "APAC", "weekly");
        input.price = 7.49;
        input.has_trial = true;
        input.conversion_rate = 41.2;
        input.ltv = 38.0;
        input.refund_rate = 2.1;

        let profile = &input.profile;
        let evaluation = evaluator.evaluate(&input).unwrap();
        let results = evaluation.results;

        let expected = |user: f64, benchmark: Option<f64>| {
            let benchmark = benchmark.unwrap();
            ((user - benchmark) / benchmark * 100.0 * 10.0).round() / 10.0
        };
        assert_eq!(
            results.pricing.diff,
            expected(7.49, table.price(profile.plan_type_key(), profile.region_key()))
        );
        assert_eq!(
            results.conversion.diff,
            expected(41.2, table.conversion(profile.category_key(), true))
        );
        assert_eq!(
            results.ltv.diff,
            expected(38.0, table.ltv(profile.category_key(), profile.plan_type_key()))
        );
        assert_eq!(
            results.refund.diff,
            percent_difference(2.1, table.refund_rate(profile.category_key()))
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = evaluator();
        let mut input = submission("Photo & Video", "LATAM", "annual");
        input.price = 19.0;
        input.refund_rate = 7.7;

        let first = evaluator.evaluate(&input).unwrap();
        let second = evaluator.evaluate(&input).unwrap();
        assert_eq!(first, second);
        for ((_, a), (_, b)) in first.results.labelled().iter().zip(second.results.labelled()) {
            assert_eq!(a.diff.to_bits(), b.diff.to_bits());
        }
    }

    #[test]
    fn non_finite_input_is_a_computation_error() {
        let mut input = submission("Education", "US", "monthly");
        input.ltv = f64::INFINITY;

        let err = evaluator().evaluate(&input).unwrap_err();
        assert!(matches!(err, BenchmarkError::Computation(_)));
    }
}
