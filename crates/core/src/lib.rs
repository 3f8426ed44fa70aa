//! medreport-core: Shared report types and text utilities
//!
//! This crate provides the patient input record, the generated report,
//! the German prompt template and the section splitter used by the server.

pub mod error;
pub mod patient;
pub mod prompt;
pub mod report;
pub mod sections;

pub use error::{ErrorBody, ReportError};
pub use patient::{Gender, PatientData, VitalSigns};
pub use prompt::build_prompt;
pub use report::{MedicalReport, ReportSections};
pub use sections::{extract_section, parse_sections};
