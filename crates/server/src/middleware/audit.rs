//! Audit logging middleware for report requests

use axum::{body::Body, extract::Request, http::Method, middleware::Next, response::Response};
use uuid::Uuid;

use super::request_id::RequestId;

/// Which patient a response concerns and, on success, which report it
/// carries. The report handler attaches it as a response extension.
#[derive(Clone, Debug)]
pub struct ReportAudit {
    pub patient_id: String,
    pub report_id: Option<Uuid>,
}

/// Log every mutating request with the patient and report it touched
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    if !matches!(*request.method(), Method::POST | Method::PUT | Method::DELETE) {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;
    let status = response.status().as_u16();

    match response.extensions().get::<ReportAudit>() {
        Some(audit) => {
            let report_id = audit
                .report_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string());
            tracing::info!(
                target: "audit",
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status,
                patient_id = %audit.patient_id,
                report_id = %report_id,
                "Report request"
            );
        }
        None => {
            tracing::info!(
                target: "audit",
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status,
                "Rejected report request"
            );
        }
    }

    response
}
