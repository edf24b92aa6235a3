use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use fundshare_core::distribution::{
    ContributorSummary, DistributionRequest, DistributionResult, MatrixPayload,
};
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct BatchRequestBody {
    requests: Vec<DistributionRequest>,
}

/// Outcome of one request in a batch; serialized as `{"ok": ...}` or
/// `{"error": "..."}`.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum BatchItem {
    Ok(DistributionResult),
    Error(String),
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<BatchItem>,
}

async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DistributionRequest>, JsonRejection>,
) -> ApiResult<Json<DistributionResult>> {
    let Json(request) = payload?;
    let result = state.distribution_service.calculate(&request)?;
    tracing::info!(
        "Distributed {} into {} receiver groups (overall total {})",
        request.total_amount,
        result.matrix.len(),
        result.overall_total
    );
    Ok(Json(result))
}

async fn calculate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequestBody>, JsonRejection>,
) -> ApiResult<Json<BatchResponse>> {
    let Json(body) = payload?;
    let count = body.requests.len();
    let service = state.distribution_service.clone();
    let outcomes = task::spawn_blocking(move || service.calculate_batch(&body.requests))
        .await
        .map_err(|e| ApiError::Internal(format!("Batch calculation aborted: {e}")))?;

    let results: Vec<BatchItem> = outcomes
        .into_iter()
        .map(|outcome| match outcome {
            Ok(result) => BatchItem::Ok(result),
            Err(err) => BatchItem::Error(err.to_string()),
        })
        .collect();
    let failed = results
        .iter()
        .filter(|r| matches!(r, BatchItem::Error(_)))
        .count();
    tracing::info!("Batch of {} distributions finished, {} rejected", count, failed);
    Ok(Json(BatchResponse { results }))
}

async fn contributors(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatrixPayload>, JsonRejection>,
) -> ApiResult<Json<Vec<ContributorSummary>>> {
    let Json(payload) = payload?;
    let result = DistributionResult::from(payload);
    Ok(Json(state.distribution_service.contributor_view(&result)))
}

async fn export_csv(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatrixPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let result = DistributionResult::from(payload);
    let csv = state.report_service.render_csv(&result)?;
    let disposition = format!(
        "attachment; filename={}",
        state.report_service.csv_file_name()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

async fn export_pdf(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatrixPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let result = DistributionResult::from(payload);
    let service = state.report_service.clone();
    let pdf = task::spawn_blocking(move || service.render_pdf(&result))
        .await
        .map_err(|e| ApiError::Internal(format!("PDF rendering aborted: {e}")))??;
    tracing::debug!("Rendered PDF report ({} bytes)", pdf.len());
    let disposition = format!(
        "attachment; filename={}",
        state.report_service.pdf_file_name()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/distribution/calculate", post(calculate))
        .route("/distribution/calculate/batch", post(calculate_batch))
        .route("/distribution/contributors", post(contributors))
        .route("/distribution/export/csv", post(export_csv))
        .route("/distribution/export/pdf", post(export_pdf))
}
