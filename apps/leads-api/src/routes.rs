use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use leads_service::{
	CheckoutRequest, CheckoutResponse, LeadTypesResponse, PricingResponse, SearchRequest,
	SearchResponse, ServiceError, StoreHealthResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(root))
		.route("/health", get(health))
		.route("/health/store", get(store_health))
		.route("/v1/leads/search", post(search))
		.route("/v1/leads/checkout", post(checkout))
		.route("/v1/pricing", get(pricing))
		.route("/v1/meta/lead-types", get(lead_types))
		.with_state(state)
}

#[derive(Debug, Serialize)]
struct Identity {
	service: &'static str,
	version: &'static str,
}

async fn root() -> Json<Identity> {
	Json(Identity { service: env!("CARGO_PKG_NAME"), version: env!("CARGO_PKG_VERSION") })
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn store_health(
	State(state): State<AppState>,
) -> Result<Json<StoreHealthResponse>, ApiError> {
	let response = state.service.store_health().await?;

	Ok(Json(response))
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;

	Ok(Json(response))
}

async fn checkout(
	State(state): State<AppState>,
	Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
	let response = state.service.checkout(payload).await?;

	Ok(Json(response))
}

async fn pricing(State(state): State<AppState>) -> Json<PricingResponse> {
	Json(state.service.pricing_table())
}

async fn lead_types(
	State(state): State<AppState>,
) -> Result<Json<LeadTypesResponse>, ApiError> {
	let response = state.service.lead_types().await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => Self {
				status: StatusCode::BAD_REQUEST,
				error_code: "invalid_request".to_string(),
				message,
			},
			ServiceError::Storage { message } => {
				tracing::error!(detail = %message, "Storage error while serving a request.");

				Self {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					error_code: "storage_error".to_string(),
					message: "Storage backend failed.".to_string(),
				}
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
