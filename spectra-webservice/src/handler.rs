use crate::{
    error::AppError,
    model::{ErrorResponse as ModelErrorResponse, SpectrumRequest, SpectrumResponse},
};

use axum::Json;
use spectra_core::{compute_spectrum, DenseMatrix, FaerEvd};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/spectrum",
    request_body = SpectrumRequest,
    responses(
        (status = 200, description = "Eigenvalues and eigenvectors of the input matrix.", body = SpectrumResponse),
        (status = 400, description = "Invalid request payload or non-square matrix.", body = ModelErrorResponse),
        (status = 500, description = "Internal server error during computation.", body = ModelErrorResponse)
    ),
    tag = "Spectrum Webservice"
)]
pub async fn compute_spectrum_handler(
    Json(payload): Json<SpectrumRequest>,
) -> Result<Json<SpectrumResponse>, AppError> {
    tracing::info!(target: "spectra_webservice::handler", "Received spectrum request: {} rows", payload.matrix.len());

    // 1. Validate the incoming request payload using `validator`
    payload.validate().map_err(AppError::Validation)?;
    tracing::debug!(target: "spectra_webservice::handler", "Request payload validated successfully.");

    // 2. Convert the web model into the core matrix type
    let matrix = DenseMatrix::from_rows(&payload.matrix)?;

    // 3. Run the decomposition on a blocking task; the solver is synchronous
    let result = tokio::task::spawn_blocking(move || compute_spectrum(&matrix, &FaerEvd::new()))
        .await
        .map_err(|e| AppError::Internal(format!("Spectrum worker task failed: {}", e)))??;

    tracing::info!(target: "spectra_webservice::handler", "Spectrum computed: {} eigenvalues", result.values.len());

    // 4. Convert the core result into the response model
    Ok(Json(SpectrumResponse::from(result)))
}
