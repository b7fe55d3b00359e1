use crate::models::{AppProfile, ReferenceTable};
use actix_web::{get, web, Responder, Result};
use serde::Serialize;

/// Raw benchmark values for one key combination. Unknown keys leave the
/// affected fields out.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<f64>,
    /// Trial to paid conversion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ltv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_rate: Option<f64>,
}

impl BenchmarkSnapshot {
    pub fn lookup(table: &ReferenceTable, profile: &AppProfile) -> Self {
        let category = profile.category_key();
        let plan_type = profile.plan_type_key();

        Self {
            pricing: table.price(plan_type, profile.region_key()),
            conversion: table.conversion(category, true),
            ltv: table.ltv(category, plan_type),
            refund_rate: table.refund_rate(category),
        }
    }
}

#[tracing::instrument(name = "Get benchmark values.", skip(table))]
#[get("/benchmarks/{category}/{region}/{plan_type}")]
pub async fn lookup_handler(
    path: web::Path<(String, String, String)>,
    table: web::Data<ReferenceTable>,
) -> Result<impl Responder> {
    let (category, region, plan_type) = path.into_inner();
    let profile = AppProfile {
        category,
        region,
        plan_type,
    };

    Ok(web::Json(BenchmarkSnapshot::lookup(table.get_ref(), &profile)))
}
