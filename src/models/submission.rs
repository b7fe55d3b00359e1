use super::{Category, PlanType, Region};
use serde::{Deserialize, Serialize};

/// The app a submission describes, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProfile {
    pub category: String,
    pub region: String,
    pub plan_type: String,
}

impl AppProfile {
    pub fn category_key(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn region_key(&self) -> Option<Region> {
        self.region.parse().ok()
    }

    pub fn plan_type_key(&self) -> Option<PlanType> {
        self.plan_type.parse().ok()
    }
}

/// A validated set of user metrics, ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub profile: AppProfile,
    pub price: f64,
    pub conversion_rate: f64,
    pub ltv: f64,
    pub refund_rate: f64,
    pub has_trial: bool,
    pub email: String,
}
