use actix_web::HttpResponse;

use crate::structs::question::QUESTIONS;
use crate::structs::respond::QuestionsResponse;

// 返回全部面试题目
pub(crate) async fn get_questions() -> HttpResponse {
    HttpResponse::Ok().json(QuestionsResponse {
        success: true,
        questions: &QUESTIONS,
        total: QUESTIONS.len(),
    })
}
