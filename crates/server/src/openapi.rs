use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CapitalRecordDoc {
    pub state: String,
    pub capital: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::capitals::get_capital,
        crate::routes::capitals::add_capital,
    ),
    components(schemas(HealthResponse, CapitalRecordDoc)),
    tags(
        (name = "health"),
        (name = "capitals")
    )
)]
pub struct ApiDoc;
