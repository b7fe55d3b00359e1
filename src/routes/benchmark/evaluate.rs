use crate::connectors::email_service::{self, EmailNotifier};
use crate::forms;
use crate::models;
use crate::services::{BenchmarkError, BenchmarkEvaluator};
use actix_web::{post, web, Responder, Result};
use serde::Serialize;
use serde_valid::Validate;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct EvaluateResponse<'a> {
    success: bool,
    #[serde(flatten)]
    evaluation: &'a models::Evaluation,
}

#[tracing::instrument(name = "Evaluate benchmark.", skip_all)]
#[post("/benchmark")]
pub async fn evaluate_handler(
    form: web::Json<forms::BenchmarkForm>,
    evaluator: web::Data<BenchmarkEvaluator>,
    notifier: web::Data<Arc<dyn EmailNotifier>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        tracing::info!("Rejected benchmark submission: {}", errors);
        return Err(BenchmarkError::from(errors).into());
    }

    let submission: models::Submission = form.into_inner().into();
    let evaluation = evaluator.evaluate(&submission).map_err(|err| {
        tracing::error!("Benchmark calculation error: {:?}", err);
        err
    })?;

    let body = serde_json::to_value(EvaluateResponse {
        success: true,
        evaluation: &evaluation,
    })
    .map_err(|err| BenchmarkError::Computation(err.to_string()))?;

    tracing::info!(
        category = %submission.profile.category,
        region = %submission.profile.region,
        plan_type = %submission.profile.plan_type,
        recommendations = evaluation.recommendations.len(),
        "Benchmark evaluated"
    );

    email_service::dispatch(
        notifier.get_ref().clone(),
        models::BenchmarkReport::new(&submission, evaluation),
    );

    Ok(web::Json(body))
}
