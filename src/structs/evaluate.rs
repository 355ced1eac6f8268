use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// 提交的回答，内容不做任何解析
#[derive(Debug, Default, PartialEq)]
pub struct EvaluationRequest {
    pub(crate) answers: Vec<Value>,
}

impl EvaluationRequest {
    /// 请求体必须是对象，answers缺省或为null时视为空列表
    pub fn from_value(body: Value) -> Result<Self, ApiError> {
        let mut body = match body {
            Value::Object(map) => map,
            _ => return Err(ApiError::bad_request("request body must be a JSON object")),
        };
        match body.remove("answers") {
            None | Some(Value::Null) => Ok(EvaluationRequest::default()),
            Some(Value::Array(answers)) => Ok(EvaluationRequest { answers }),
            Some(_) => Err(ApiError::bad_request("\"answers\" must be an array")),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Scores {
    pub(crate) confidence: u8,
    pub(crate) content: u8,
    pub(crate) communication: u8,
    pub(crate) eye_contact: u8,
    pub(crate) overall: f64,
}

#[derive(Serialize, Debug)]
pub struct EvaluationResponse {
    pub(crate) success: bool,
    pub(crate) scores: Scores,
    pub(crate) suggestions: Vec<&'static str>,
    pub(crate) total_answers: usize,
}
