//! Root metadata endpoint

use axum::Json;

use crate::responses::ApiInfoResponse;

pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        version: crate::API_VERSION.to_string(),
        description: "Users API".to_string(),
        documentation: "See README.md for endpoint documentation".to_string(),
    })
}
