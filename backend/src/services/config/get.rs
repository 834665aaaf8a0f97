use crate::config::ServerConfig;
use actix_web::{web, HttpResponse, Responder};
use log::warn;

pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match &config.client {
        Some(client) => HttpResponse::Ok().json(client),
        None => {
            warn!("Config requested but Supabase settings are missing");
            HttpResponse::ServiceUnavailable().body("Supabase settings are not configured")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ServerConfig;
    use crate::services;
    use actix_web::{http::StatusCode, test, web, App};
    use common::model::config::ClientConfig;

    fn server_config(client: Option<ClientConfig>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            client,
        }
    }

    #[actix_web::test]
    async fn returns_client_config() {
        let client = ClientConfig::new("https://abc.supabase.co", "anon-key");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(server_config(Some(client.clone()))))
                .service(services::config::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["supabase_url"], "https://abc.supabase.co");
        assert_eq!(body["anon_key"], "anon-key");
        assert_eq!(body["bucket"], "member-files");
        assert_eq!(body["table"], "members");
        assert_eq!(body["member_status"], "pending");
    }

    #[actix_web::test]
    async fn unavailable_without_supabase_settings() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(server_config(None)))
                .service(services::config::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
