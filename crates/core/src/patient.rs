//! Patient input record submitted by the report form

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ReportError;

/// Administrative gender as sent by the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional vital signs. Absent members are omitted from JSON output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<u32>,
}

/// Treat an explicit `null` like a missing key. The form sends `null` for a
/// cleared number input.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Structured patient data collected by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: Gender,

    #[serde(default, deserialize_with = "null_as_default")]
    pub symptoms: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub vital_signs: VitalSigns,

    #[serde(default, deserialize_with = "null_as_default")]
    pub diagnosis: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub medications: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub allergies: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl PatientData {
    /// Check the fields a report cannot be generated without.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.patient_id.trim().is_empty() || self.diagnosis.trim().is_empty() {
            return Err(ReportError::MissingFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_form_payload() {
        let patient: PatientData = serde_json::from_value(json!({
            "patientId": "P-1001",
            "age": 54,
            "gender": "female",
            "symptoms": ["Brustschmerz", "Dyspnoe"],
            "vitalSigns": {"bloodPressure": "140/90", "heartRate": 96},
            "diagnosis": "Verdacht auf NSTEMI",
            "medications": ["ASS 100mg"],
            "allergies": [],
            "notes": "Raucherin"
        }))
        .unwrap();

        assert_eq!(patient.patient_id, "P-1001");
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.symptoms.len(), 2);
        assert_eq!(patient.vital_signs.blood_pressure.as_deref(), Some("140/90"));
        assert_eq!(patient.vital_signs.heart_rate, Some(96));
        assert_eq!(patient.vital_signs.temperature, None);
    }

    #[test]
    fn absent_fields_take_form_defaults() {
        let patient: PatientData =
            serde_json::from_value(json!({"patientId": "P-1", "diagnosis": "Grippe"})).unwrap();

        assert_eq!(patient.age, 0);
        assert_eq!(patient.gender, Gender::Male);
        assert!(patient.symptoms.is_empty());
        assert_eq!(patient.vital_signs, VitalSigns::default());
        assert!(patient.notes.is_empty());
    }

    #[test]
    fn null_fields_take_form_defaults() {
        let patient: PatientData = serde_json::from_value(json!({
            "patientId": "P-1",
            "age": null,
            "gender": null,
            "symptoms": null,
            "vitalSigns": null,
            "diagnosis": "Grippe",
            "medications": null,
            "allergies": null,
            "notes": null
        }))
        .unwrap();

        assert_eq!(patient.age, 0);
        assert_eq!(patient.gender, Gender::Male);
        assert!(patient.symptoms.is_empty());
        assert_eq!(patient.vital_signs, VitalSigns::default());
        assert!(patient.medications.is_empty());
        assert!(patient.notes.is_empty());
        assert_eq!(patient.validate(), Ok(()));
    }

    #[test]
    fn null_required_field_fails_validation() {
        let patient: PatientData =
            serde_json::from_value(json!({"patientId": null, "diagnosis": "Grippe"})).unwrap();
        assert_eq!(patient.validate(), Err(ReportError::MissingFields));
    }

    #[test]
    fn rejects_unknown_gender() {
        let result = serde_json::from_value::<PatientData>(json!({"gender": "unknown"}));
        assert!(result.is_err());
    }

    #[test]
    fn validate_requires_id_and_diagnosis() {
        let mut patient = PatientData {
            patient_id: "P-1".to_string(),
            diagnosis: "Grippe".to_string(),
            ..Default::default()
        };
        assert_eq!(patient.validate(), Ok(()));

        patient.diagnosis = "   ".to_string();
        assert_eq!(patient.validate(), Err(ReportError::MissingFields));

        patient.diagnosis = "Grippe".to_string();
        patient.patient_id.clear();
        assert_eq!(patient.validate(), Err(ReportError::MissingFields));
    }

    #[test]
    fn vital_signs_skip_absent_members() {
        let vitals = VitalSigns {
            heart_rate: Some(72),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&vitals).unwrap(), r#"{"heartRate":72}"#);
        assert_eq!(serde_json::to_string(&VitalSigns::default()).unwrap(), "{}");
    }
}
