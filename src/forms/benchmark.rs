use crate::helpers::number;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Validation errors are keyed by the first string argument of a field's
/// `#[serde(...)]`, so `rename` leads wherever another string argument follows.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub category: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub region: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    #[serde(rename = "planType")]
    pub plan_type: String,
    #[serde(rename = "price", deserialize_with = "number::deserialize")]
    #[validate(exclusive_minimum = 0.0)]
    pub price: f64,
    /// Percent of installs (or trials) converting to paid.
    #[serde(
        rename = "conversionRate",
        default,
        deserialize_with = "number::deserialize_option"
    )]
    #[validate(minimum = 0.0)]
    #[validate(maximum = 100.0)]
    pub conversion_rate: Option<f64>,
    #[serde(rename = "ltv", default, deserialize_with = "number::deserialize_option")]
    #[validate(minimum = 0.0)]
    pub ltv: Option<f64>,
    #[serde(
        rename = "refundRate",
        default,
        deserialize_with = "number::deserialize_option"
    )]
    #[validate(minimum = 0.0)]
    #[validate(maximum = 100.0)]
    pub refund_rate: Option<f64>,
    #[serde(default)]
    pub has_trial: bool,
    #[validate(max_length = 254)]
    #[validate(pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$")]
    pub email: String,
}

impl From<BenchmarkForm> for models::Submission {
    fn from(form: BenchmarkForm) -> Self {
        models::Submission {
            profile: models::AppProfile {
                category: form.category,
                region: form.region,
                plan_type: form.plan_type,
            },
            price: form.price,
            conversion_rate: form.conversion_rate.unwrap_or_default(),
            ltv: form.ltv.unwrap_or_default(),
            refund_rate: form.refund_rate.unwrap_or_default(),
            has_trial: form.has_trial,
            email: form.email,
        }
    }
}
