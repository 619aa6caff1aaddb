use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ApiResponse;

#[derive(Debug, Serialize)]
pub struct AlertAck {
    pub received: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub received_at: i64,
}

// TradingView payloads are free-form JSON; we only require an object with
// something in it.
fn ensure_alert_object(body: &Value) -> Result<()> {
    match body.as_object() {
        Some(map) if !map.is_empty() => Ok(()),
        _ => Err(AppError::BadRequest(
            "Alert payload must be a non-empty JSON object".to_string(),
        )),
    }
}

fn alert_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /webhook/alert
///
/// TradingView delivers alert webhooks here. Deliveries are recorded and
/// acknowledged; nothing is executed on their behalf.
pub async fn receive_alert(Json(body): Json<Value>) -> Result<Json<ApiResponse<AlertAck>>> {
    ensure_alert_object(&body)?;

    let name = alert_field(&body, "name");
    let message = alert_field(&body, "message");
    let received_at = Utc::now();

    tracing::info!(
        "tradingview alert received name={:?} message={:?} at={}",
        name,
        message,
        received_at.to_rfc3339()
    );

    Ok(Json(ApiResponse::success(AlertAck {
        received: true,
        name,
        received_at: received_at.timestamp(),
    })))
}
