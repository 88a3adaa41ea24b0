use crate::{handler, model}; // Import necessary modules
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        handler::compute_spectrum_handler,
    ),
    components(
        schemas(
            model::SpectrumRequest,
            model::SpectrumResponse,
            model::ComplexEntry,
            model::ErrorResponse,
        )
    ),
    tags(
        (name = "Spectrum Webservice", description = "Endpoints for matrix eigendecomposition")
    ),
    info(
        title = "Spectrum Webservice API",
        version = "0.1.0",
        description = "An API for computing eigenvalues and eigenvectors of numeric matrices, with complex results in polar and Cartesian form."
    )
)]
pub struct ApiDoc;
