use super::{AppProfile, Evaluation, Submission};
use serde::Serialize;

/// Everything the email notifier needs to render and address a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub recipient: String,
    pub profile: AppProfile,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl BenchmarkReport {
    pub fn new(submission: &Submission, evaluation: Evaluation) -> Self {
        Self {
            recipient: submission.email.clone(),
            profile: submission.profile.clone(),
            evaluation,
        }
    }

    pub fn subject(&self) -> String {
        format!("Your {} App Benchmark Report", self.profile.category)
    }
}
