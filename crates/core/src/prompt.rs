//! German report prompt template

use crate::patient::PatientData;

const INSTRUCTION: &str =
    "Du bist ein medizinischer Berichtsassistent. Erstelle einen strukturierten Arztbericht auf Deutsch.";

const SECTION_REQUEST: &str = r#"Erstelle einen professionellen Arztbericht mit folgenden Abschnitten:

1. PATIENTENINFORMATIONEN
2. ANAMNESE UND SYMPTOMATIK
3. KLINISCHE BEFUNDE
4. DIAGNOSE UND BEURTEILUNG
5. THERAPIE UND MEDIKATION

Halte dich an medizinische Standards. Sei präzise und faktisch."#;

/// Interpolate patient fields into the report prompt
pub fn build_prompt(data: &PatientData) -> String {
    let vitals = serde_json::to_string(&data.vital_signs).unwrap_or_else(|_| "{}".to_string());

    format!(
        "{INSTRUCTION}

PATIENTENDATEN:
- ID: {id}
- Alter: {age} Jahre
- Geschlecht: {gender}
- Symptome: {symptoms}
- Vitalzeichen: {vitals}
- Diagnose: {diagnosis}
- Medikation: {medications}
- Allergien: {allergies}
- Notizen: {notes}

{SECTION_REQUEST}",
        id = data.patient_id,
        age = data.age,
        gender = data.gender,
        symptoms = data.symptoms.join(", "),
        diagnosis = data.diagnosis,
        medications = data.medications.join(", "),
        allergies = data.allergies.join(", "),
        notes = data.notes,
    )
}
