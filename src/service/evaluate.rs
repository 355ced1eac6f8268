use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::error::ApiError;
use crate::scoring::{evaluate, Evaluation};
use crate::structs::evaluate::{EvaluationRequest, EvaluationResponse};

// 对提交的回答进行打分
pub(crate) async fn evaluate_answers(req_body: web::Json<Value>) -> Result<HttpResponse, ApiError> {
    let request = EvaluationRequest::from_value(req_body.into_inner())?;
    let Evaluation { scores, suggestions } = evaluate(&mut rand::thread_rng());
    log::debug!(
        "收到{}条回答，总分{}，建议{}条",
        request.answers.len(),
        scores.overall,
        suggestions.len()
    );
    Ok(HttpResponse::Ok().json(EvaluationResponse {
        success: true,
        scores,
        suggestions,
        total_answers: request.answers.len(),
    }))
}
