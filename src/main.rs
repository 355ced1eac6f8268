mod config;
mod error;
mod scoring;
mod service;
mod structs;
mod webserver;

use crate::config::CONFIG;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("读取配置: {:?}", *CONFIG);
    webserver::run(&CONFIG).await
}
