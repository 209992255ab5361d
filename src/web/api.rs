use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;

use crate::registry;
use crate::service::PriceService;

/// Fixed 503 body; upstream failure detail stays in the server logs.
const UPSTREAM_ERROR_DETAIL: &str = "Unable to fetch cryptocurrency data from Binance";

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    range: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/api/price/{coin_id}", web::get().to(get_price));
}

/// Health/discovery endpoint.
async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "online",
        "message": "Crypto Dashboard API is running (Binance Only)",
        "endpoints": ["/api/price/{coin_id}"],
        "supported_ranges": registry::SUPPORTED_RANGES,
    }))
}

async fn get_price(
    service: web::Data<PriceService>,
    coin_id: web::Path<String>,
    query: web::Query<PriceQuery>,
) -> impl Responder {
    let range = query.range.as_deref().unwrap_or("24h");

    match service.get_price_series(&coin_id, range).await {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) if e.is_invalid_input() => HttpResponse::BadRequest().json(serde_json::json!({
            "detail": e.to_string()
        })),
        Err(e) => {
            error!("API failed for {} with range {}: {}", coin_id, range, e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "detail": UPSTREAM_ERROR_DETAIL
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BinanceClient;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::time::Duration;

    fn price_service(server: &mockito::ServerGuard) -> web::Data<PriceService> {
        let client = BinanceClient::new(server.url(), Duration::from_secs(5)).unwrap();
        web::Data::new(PriceService::new(client))
    }

    macro_rules! spawn_app {
        ($server:expr) => {
            test::init_service(
                App::new()
                    .app_data(price_service($server))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn klines_body(count: usize) -> String {
        let rows: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"[{},"100.0","101.0","99.0","100.006","12.5",0,"1250.0",100,"6.0","600.0","0"]"#,
                    1700000000000i64 + i as i64 * 3_600_000
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    #[actix_web::test]
    async fn root_reports_status_and_supported_ranges() {
        let server = mockito::Server::new_async().await;
        let app = spawn_app!(&server);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["message"], "Crypto Dashboard API is running (Binance Only)");
        assert_eq!(body["endpoints"], serde_json::json!(["/api/price/{coin_id}"]));
        assert_eq!(
            body["supported_ranges"],
            serde_json::json!(["1h", "6h", "24h", "7d", "30d"])
        );
    }

    #[actix_web::test]
    async fn unknown_coin_returns_400_with_enumerated_detail() {
        let server = mockito::Server::new_async().await;
        let app = spawn_app!(&server);

        let req = test::TestRequest::get().uri("/api/price/dogecoin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Invalid coin_id. Must be one of: [\"bitcoin\", \"ethereum\", \"solana\"]"
        );
    }

    #[actix_web::test]
    async fn unknown_range_returns_400_with_enumerated_detail() {
        let server = mockito::Server::new_async().await;
        let app = spawn_app!(&server);

        let req = test::TestRequest::get()
            .uri("/api/price/bitcoin?range=90d")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Invalid range. Must be one of: [\"1h\", \"6h\", \"24h\", \"7d\", \"30d\"]"
        );
    }

    #[actix_web::test]
    async fn upstream_failure_returns_503_with_fixed_detail() {
        let mut server = mockito::Server::new_async().await;
        // Klines fail with 502 while the ticker is healthy; the 502 must be
        // what drives the 503, not an unmatched-request fallback.
        let klines = server
            .mock("GET", "/api/v3/klines")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;
        server
            .mock("GET", "/api/v3/ticker/24hr")
            .match_query(mockito::Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(r#"{"quoteVolume":"1.0"}"#)
            .create_async()
            .await;
        let app = spawn_app!(&server);

        let req = test::TestRequest::get().uri("/api/price/bitcoin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Unable to fetch cryptocurrency data from Binance");
        klines.assert_async().await;
    }

    #[actix_web::test]
    async fn range_defaults_to_24h() {
        let mut server = mockito::Server::new_async().await;
        let klines = server
            .mock("GET", "/api/v3/klines")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("interval".into(), "1h".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "24".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(klines_body(24))
            .create_async()
            .await;
        server
            .mock("GET", "/api/v3/ticker/24hr")
            .match_query(mockito::Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(r#"{"quoteVolume":"123456.78"}"#)
            .create_async()
            .await;
        let app = spawn_app!(&server);

        let req = test::TestRequest::get().uri("/api/price/bitcoin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        klines.assert_async().await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["coin"], "bitcoin");
        assert_eq!(body["range"], "24h");
        assert_eq!(body["data_points"], 24);
        assert_eq!(body["history"].as_array().unwrap().len(), 24);
        assert_eq!(body["history"][0]["price"], 100.01);
        assert_eq!(body["volume_24h"], 123456.78);
        assert_eq!(body["source"], "binance");
    }
}
