use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use extracto_ingest::{TransactionRecord, Upload, extract_batch};
use serde_json::json;

use crate::error::AppError;
use crate::startup::AppState;

const UPLOAD_FORM: &str = include_str!("../static/form.html");

pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "extracto",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Body-limit overruns surface as multipart errors; keep their 413.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(anyhow::anyhow!("{}: {}", context, err.body_text()))
    } else {
        AppError::BadRequest(anyhow::anyhow!("{}: {}", context, err))
    }
}

/// Parse every uploaded statement and return all rows as one JSON array.
pub async fn extract_statements(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<TransactionRecord>>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        // Plain form fields carry no file name.
        let name = match field.file_name() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => continue,
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&format!("Failed to read bytes of {}", name), e))?;

        if data.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(anyhow::anyhow!(
                "{} is {} bytes (max {})",
                name,
                data.len(),
                max_bytes
            )));
        }

        uploads.push(Upload::new(name, data.to_vec()));
    }

    if uploads.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("No file uploaded")));
    }

    tracing::info!(documents = uploads.len(), "Statement extraction started");

    let extractor = state.extractor.clone();
    let records = tokio::task::spawn_blocking(move || extract_batch(extractor.as_ref(), &uploads))
        .await?
        .map_err(|e| {
            tracing::warn!(error = %format!("{e:#}"), "Statement extraction failed");
            AppError::Unprocessable(e)
        })?;

    tracing::info!(records = records.len(), "Statement extraction completed");

    Ok(Json(records))
}
