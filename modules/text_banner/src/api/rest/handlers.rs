//! HTTP request handlers - thin layer that delegates to the module

use super::{
    dto::*,
    error::{map_anyhow_error, map_domain_error, Problem},
};
use crate::module::{TextBannerModule, SETTINGS_UPDATED_MESSAGE};
use axum::{
    extract::{Form, Query},
    response::Html,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Current admin form values for every shop language
pub async fn get_settings(
    module: Arc<TextBannerModule>,
) -> Result<Json<BannerSettingsResponse>, Problem> {
    let languages = module.host().languages().await.map_err(map_anyhow_error)?;
    let values = module
        .service()
        .form_values(&languages)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(values.into()))
}

/// Admin form submission
pub async fn save_settings(
    module: Arc<TextBannerModule>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<SaveSettingsResponse>, Problem> {
    let languages = module.host().languages().await.map_err(map_anyhow_error)?;
    module
        .service()
        .save_submission(&form, &languages)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SaveSettingsResponse {
        message: SETTINGS_UPDATED_MESSAGE.to_string(),
    }))
}

/// Styling block, empty while the banner is disabled or cannot be read
pub async fn header_fragment(
    module: Arc<TextBannerModule>,
    Query(query): Query<FragmentQuery>,
) -> Html<String> {
    Html(module.display_header(&query.into()).await)
}

/// Banner markup, served from the render cache when possible
pub async fn top_fragment(
    module: Arc<TextBannerModule>,
    Query(query): Query<FragmentQuery>,
) -> Html<String> {
    Html(module.display_top(&query.into()).await)
}

#[cfg(test)]
mod tests {
    use super::super::routes::register_routes;
    use crate::config::Config;
    use crate::contract::LanguageId;
    use crate::domain::NoOpEventPublisher;
    use crate::infra::{InMemorySettingsStore, StaticShopHost};
    use crate::module::TextBannerModule;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        let host = Arc::new(StaticShopHost::new(vec![
            LanguageId::new(1),
            LanguageId::new(2),
        ]));
        let module = TextBannerModule::with_store(
            Config::default(),
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(NoOpEventPublisher),
            host,
        );
        register_routes(Router::new(), Arc::new(module))
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/text-banner/settings")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_read_settings() {
        let app = create_test_router();

        let response = app
            .clone()
            .oneshot(form_request(
                "link_1=sale.html&text_1=Hello&text_2=Bonjour&enabled=1&backgroundColor=%23fff",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["message"], "The settings have been updated.");

        let response = app
            .oneshot(get_request("/text-banner/settings"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["languages"][0]["language_id"], 1);
        assert_eq!(json["languages"][0]["text"], "Hello");
        assert_eq!(json["languages"][0]["enabled"], true);
        assert_eq!(json["languages"][1]["text"], "Bonjour");
        assert_eq!(json["colors"]["background_color"], "#fff");
    }

    #[tokio::test]
    async fn test_invalid_submission_returns_problem() {
        let app = create_test_router();

        let response = app
            .oneshot(form_request("enabled=perhaps"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["title"], "Validation Error");
    }

    #[tokio::test]
    async fn test_fragments_follow_saved_settings() {
        let app = create_test_router();

        let response = app
            .clone()
            .oneshot(get_request("/text-banner/fragments/top?lang=1&context=shop-1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "");

        app.clone()
            .oneshot(form_request("text_1=Free+shipping&enabled=1&foregroundColor=white"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_request("/text-banner/fragments/top?lang=1&context=shop-1"))
            .await
            .unwrap();
        assert!(body_string(response).await.contains("Free shipping"));

        let response = app
            .oneshot(get_request("/text-banner/fragments/header?lang=1"))
            .await
            .unwrap();
        let css = body_string(response).await;
        assert!(css.contains("color:white;}"));
    }
}
