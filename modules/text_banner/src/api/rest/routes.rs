//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::module::TextBannerModule;
use axum::{
    extract::{Form, Query},
    response::Html,
    routing::get,
    Extension, Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, module: Arc<TextBannerModule>) -> Router {
    router
        .route(
            "/text-banner/settings",
            get(get_settings_handler).post(save_settings_handler),
        )
        .route("/text-banner/fragments/header", get(header_fragment_handler))
        .route("/text-banner/fragments/top", get(top_fragment_handler))
        .layer(Extension(module))
}

// ===== Handler wrappers that extract dependencies from Extension =====

async fn get_settings_handler(
    Extension(module): Extension<Arc<TextBannerModule>>,
) -> Result<Json<BannerSettingsResponse>, Problem> {
    handlers::get_settings(module).await
}

async fn save_settings_handler(
    Extension(module): Extension<Arc<TextBannerModule>>,
    form: Form<HashMap<String, String>>,
) -> Result<Json<SaveSettingsResponse>, Problem> {
    handlers::save_settings(module, form).await
}

async fn header_fragment_handler(
    Extension(module): Extension<Arc<TextBannerModule>>,
    query: Query<FragmentQuery>,
) -> Html<String> {
    handlers::header_fragment(module, query).await
}

async fn top_fragment_handler(
    Extension(module): Extension<Arc<TextBannerModule>>,
    query: Query<FragmentQuery>,
) -> Html<String> {
    handlers::top_fragment(module, query).await
}
