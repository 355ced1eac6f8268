use actix_web::HttpResponse;

use crate::structs::respond::HealthResponse;

pub(crate) async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        message: "AI Interview Coach API is running",
    })
}
