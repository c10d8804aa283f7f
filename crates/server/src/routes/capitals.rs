use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use service::{errors::ServiceError, store::CapitalStore};

/// Shared handler state, constructed once at startup and injected into the
/// router. The store is read-only, so cloning is cheap and concurrent reads
/// need no coordination.
#[derive(Clone)]
pub struct ServerState {
    pub capitals: CapitalStore,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CapitalQuery {
    /// State to look up; when absent the full dataset is returned.
    pub state: Option<String>,
}

/// Read endpoint: a specific state's capital, or the whole mapping.
#[utoipa::path(
    get, path = "/capital", tag = "capitals",
    params(CapitalQuery),
    responses(
        (status = 200, description = "Known state record, or the full state-to-capital mapping"),
        (status = 400, description = "Requested state is not in the dataset")
    )
)]
pub async fn get_capital(
    State(state): State<ServerState>,
    Query(query): Query<CapitalQuery>,
) -> Result<Response, StatusCode> {
    // An empty `state=` value falls through to the full-dataset branch.
    match query.state.filter(|s| !s.is_empty()) {
        Some(requested) => match state.capitals.lookup(&requested) {
            Ok(record) => {
                info!(state = %record.state, capital = %record.capital, "user requested data for a single state");
                Ok(Json(record).into_response())
            }
            Err(ServiceError::UnknownState(unknown)) => {
                warn!(state = %unknown, "user requested data for a state not in our dataset");
                Err(StatusCode::BAD_REQUEST)
            }
        },
        None => {
            info!("user is requesting all state data");
            Ok(Json(state.capitals.entries()).into_response())
        }
    }
}

/// Write endpoint stub: reports the capability as not implemented.
/// The request body is never read and the store is never touched.
#[utoipa::path(
    post, path = "/capital", tag = "capitals",
    responses((status = 501, description = "Adding capitals is not implemented"))
)]
pub async fn add_capital() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
