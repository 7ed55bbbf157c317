//! Budget request endpoint.

use axum::body::Bytes;

use super::{success, ApiResult};
use crate::budget::{ValidBudgetRequest, RECEIVED_MESSAGE};
use crate::models::{BudgetReceipt, BudgetRequest};

/// POST /api/budget - Accept a budget request.
///
/// The body is parsed regardless of the declared content type.
pub async fn submit_budget(body: Bytes) -> ApiResult<BudgetReceipt> {
    let request: BudgetRequest = serde_json::from_slice(&body)?;
    let valid = ValidBudgetRequest::validate(&request).inspect_err(|_| {
        tracing::info!("Rejected budget request with missing required fields");
    })?;

    let request_id = uuid::Uuid::new_v4().to_string();
    let notification = valid.notification(chrono::Local::now());

    tracing::info!(
        request_id = %request_id,
        project_type = valid.project_type,
        "Budget request received:\n{}",
        notification
    );

    success(BudgetReceipt {
        message: RECEIVED_MESSAGE.to_string(),
        request_id,
    })
}
