use serde::Serialize;

use crate::structs::question::Question;

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub(crate) success: bool,
    pub(crate) questions: &'static [Question],
    pub(crate) total: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) message: &'static str,
}
