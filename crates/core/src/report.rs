use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::sections::parse_sections;

/// Sections derived from the raw report text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSections {
    pub patient_info: String,
    pub chief_complaint: String,
    pub clinical_findings: String,
    pub assessment: String,
    pub treatment: String,
}

/// A generated medical report. Created once per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReport {
    pub report_id: Uuid,
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
    pub patient_id: String,
    pub report: String,
    pub sections: ReportSections,
}

/// RFC 3339 with millisecond precision and a `Z` suffix
fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl MedicalReport {
    /// Wrap raw model output for the given patient
    pub fn new(patient_id: impl Into<String>, report: impl Into<String>) -> Self {
        let report = report.into();
        let sections = parse_sections(&report);

        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            patient_id: patient_id.into(),
            report,
            sections,
        }
    }
}
