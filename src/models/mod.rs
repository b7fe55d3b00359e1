mod catalog;
mod comparison;
mod recommendation;
mod reference;
mod report;
mod submission;

pub use catalog::{Category, PlanType, Region, UnknownKey};
pub use comparison::{percent_difference, ComparisonSet, Evaluation, MetricComparison};
pub use recommendation::{Priority, Recommendation, RecommendationKind};
pub use reference::{ConversionBenchmark, ReferenceTable};
pub use report::BenchmarkReport;
pub use submission::{AppProfile, Submission};
