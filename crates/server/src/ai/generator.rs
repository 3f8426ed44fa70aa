//! Medical report generation from patient data

use medreport_core::{MedicalReport, PatientData, build_prompt};

use super::client::{InferenceError, OllamaClient};

/// Builds the prompt, calls the model once and sections the result
#[derive(Clone)]
pub struct ReportGenerator {
    client: OllamaClient,
}

impl ReportGenerator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Generate a report for an already validated patient record
    pub async fn generate(&self, patient: &PatientData) -> Result<MedicalReport, InferenceError> {
        let prompt = build_prompt(patient);

        tracing::debug!(
            patient_id = %patient.patient_id,
            model = self.client.model(),
            prompt_len = prompt.len(),
            "Sending report prompt"
        );

        let text = self.client.generate(&prompt).await?;
        Ok(MedicalReport::new(patient.patient_id.clone(), text))
    }
}
