//! Splits free-text model output on the fixed German section headers

use crate::report::ReportSections;

const PATIENT_INFO: &str = "PATIENTENINFORMATIONEN";
const HISTORY: &str = "ANAMNESE";
const CLINICAL: &str = "KLINISCHE";
const CLINICAL_FINDINGS: &str = "KLINISCHE BEFUNDE";
const DIAGNOSIS: &str = "DIAGNOSE";
const THERAPY: &str = "THERAPIE";

/// Return the text from `start` (inclusive) up to `end` (exclusive), trimmed.
///
/// The end marker is searched from the start position onwards. A missing
/// start marker yields an empty string; a missing, empty or absent end marker
/// extends the section to the end of the text.
pub fn extract_section(text: &str, start: &str, end: Option<&str>) -> String {
    let Some(start_idx) = text.find(start) else {
        return String::new();
    };

    let rest = &text[start_idx..];
    let len = end
        .filter(|marker| !marker.is_empty())
        .and_then(|marker| rest.find(marker))
        .unwrap_or(rest.len());

    rest[..len].trim().to_string()
}

/// Derive the five report sections from the raw model output
pub fn parse_sections(report: &str) -> ReportSections {
    ReportSections {
        patient_info: extract_section(report, PATIENT_INFO, Some(HISTORY)),
        chief_complaint: extract_section(report, HISTORY, Some(CLINICAL)),
        clinical_findings: extract_section(report, CLINICAL_FINDINGS, Some(DIAGNOSIS)),
        assessment: extract_section(report, DIAGNOSIS, Some(THERAPY)),
        treatment: extract_section(report, THERAPY, None),
    }
}
