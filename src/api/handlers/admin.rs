use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::services::ingestion::IngestionService;
use crate::services::processing::ProcessingService;
use super::AppState;

const ADMIN_TOKEN_ENV: &str = "ADMIN_TOKEN";

pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    tokio::spawn(async move {
        log::info!("Admin triggered refresh started");
        let ingest_result = async {
            let mut ingest_service = IngestionService::new(&state.config)?;
            ingest_service.run().await
        }
        .await;
        if let Err(e) = ingest_result {
            log::error!("Refresh failed at ingestion: {:?}", e);
            return;
        }
        let process_result = async {
            let process_service = ProcessingService::new()?;
            process_service.run()
        }
        .await;
        if let Err(e) = process_result {
            log::error!("Refresh failed at processing: {:?}", e);
            return;
        }
        log::info!("Admin triggered refresh completed successfully");
    });

    (StatusCode::ACCEPTED, "Refresh triggered").into_response()
}

fn is_authorized(headers: &HeaderMap) -> bool {
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    let expected = match std::env::var(ADMIN_TOKEN_ENV) {
        Ok(token) if !token.is_empty() => token,
        // No token configured means the endpoint stays shut
        _ => return false,
    };

    match auth_header {
        Some(header) => header == format!("Bearer {}", expected),
        None => false,
    }
}
