use crate::models::{Category, PlanType, Region};
use actix_web::{get, web, Responder, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub categories: Vec<&'static str>,
    pub regions: Vec<&'static str>,
    pub plan_types: Vec<&'static str>,
}

impl FormOptions {
    pub fn known() -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
            regions: Region::ALL.iter().map(|r| r.as_str()).collect(),
            plan_types: PlanType::ALL.iter().map(|p| p.as_str()).collect(),
        }
    }
}

#[tracing::instrument(name = "List form options.")]
#[get("/options")]
pub async fn options_handler() -> Result<impl Responder> {
    Ok(web::Json(FormOptions::known()))
}
