use axum::{Extension, Json};
use std::sync::Arc;

use crate::config::{AppConfig, PublicConfig};

/// GET /api/config
/// Brand and allowed image hosts; user details stay server-side
pub async fn config_handler(Extension(config): Extension<Arc<AppConfig>>) -> Json<PublicConfig> {
    Json(config.public())
}
