pub mod errors;
pub mod evaluator;
pub mod report_renderer;
pub mod thresholds;

pub use errors::BenchmarkError;
pub use evaluator::BenchmarkEvaluator;
pub use report_renderer::ReportRenderer;
