mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::load();
    let bind = (config.host.clone(), config.port);
    if STATIC_DIR.get_file("index.html").is_none() {
        log::warn!("No frontend build embedded; run `trunk build` in frontend/ and rebuild");
    }
    info!("Server running at http://{}:{}", bind.0, bind.1);

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get().uri("/register/step-2").to_request();
        let resp = test::call_service(&app, req).await;

        if STATIC_DIR.get_file("index.html").is_some() {
            assert_eq!(resp.status(), StatusCode::OK);
            let content_type = resp.headers().get("content-type").unwrap();
            assert_eq!(content_type, "text/html; charset=utf-8");
        } else {
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn api_routes_win_over_embedded_files() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServerConfig::from_lookup(|_| None)))
                .service(services::config::configure_routes())
                .default_service(web::route().to(serve_embedded)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
