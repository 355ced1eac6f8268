use std::io;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use crate::config::Config;
use crate::error::ApiError;
use crate::service::evaluate::evaluate_answers;
use crate::service::health::health_check;
use crate::service::questions::get_questions;

// 允许任意来源跨域访问
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

/// 注册所有api路由，json解析失败统一返回400
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    let json_config = web::JsonConfig::default()
        .limit(json_limit)
        .error_handler(|err, _req| {
            log::debug!("解析请求体失败: {}", err);
            ApiError::bad_request(err.to_string()).into()
        });

    cfg.app_data(json_config).service(
        web::scope("/api")
            .route("/questions", web::get().to(get_questions))
            .route("/evaluate", web::post().to(evaluate_answers))
            .route("/health", web::get().to(health_check)),
    );
}

// 启动actix服务
pub async fn run(config: &Config) -> io::Result<()> {
    let json_limit = config.json_limit;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .configure(|cfg| configure(cfg, json_limit))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let (host, port) = config.bind_addr();
    let server = server.bind((host, port))?.run();
    log::info!("HTTP服务启动成功，监听{}:{}", host, port);
    server.await
}
