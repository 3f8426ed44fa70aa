//! Report generation endpoint

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use medreport_core::{MedicalReport, PatientData};

use crate::ai::{OllamaClient, ReportGenerator};
use crate::error::AppError;
use crate::middleware::audit::ReportAudit;

/// POST /api/generate-report - Generate a sectioned report for one patient
///
/// Validates the required fields, prompts the model once and returns the
/// report. Model failures are logged and surfaced as a generic 500.
pub async fn generate(
    State(client): State<OllamaClient>,
    body: Result<Json<PatientData>, JsonRejection>,
) -> Result<(Extension<ReportAudit>, Json<MedicalReport>), Response> {
    let Json(patient) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected report request body");
        AppError::BadRequest("Invalid request body".to_string()).into_response()
    })?;

    let mut audit = ReportAudit {
        patient_id: patient.patient_id.clone(),
        report_id: None,
    };

    patient
        .validate()
        .map_err(|e| (Extension(audit.clone()), AppError::from(e)).into_response())?;

    tracing::info!(patient_id = %patient.patient_id, "Generating report");

    let generator = ReportGenerator::new(client);
    let report = match generator.generate(&patient).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                patient_id = %patient.patient_id,
                error = %e,
                "Report generation failed"
            );
            metrics::counter!("report_generation_failures_total").increment(1);
            let err = AppError::Internal("Failed to generate report".to_string());
            return Err((Extension(audit), err).into_response());
        }
    };

    metrics::counter!("reports_generated_total").increment(1);
    tracing::info!(
        patient_id = %report.patient_id,
        report_id = %report.report_id,
        "Report generated"
    );

    audit.report_id = Some(report.report_id);
    Ok((Extension(audit), Json(report)))
}
