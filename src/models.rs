use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub symptom: String,
    pub occurrences: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyDataset {
    pub name: String,
    pub rows: Vec<FrequencyRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub number: String,
    pub clinic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub full_name: String,
    pub age: u32,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub details: PersonalDetails,
    pub medical_history: Vec<String>,
    pub current_medication: Vec<String>,
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSpec {
    pub accept: Vec<String>,
    pub button_label: String,
    pub label_title: String,
    pub label_description: String,
}

/// Sample data every screen renders from. Read-only for the life of the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    pub symptoms: Vec<SymptomEntry>,
    pub medication: Vec<MedicationEntry>,
    pub notifications: Vec<Notification>,
    pub frequency_sets: Vec<FrequencyDataset>,
    pub profile: Profile,
    pub upload: UploadSpec,
}

pub const FREQUENCY_SET_COUNT: usize = 3;

impl Fixtures {
    pub fn validate(&self) -> Result<(), String> {
        unique_values("symptoms", self.symptoms.iter().map(|s| (&s.label, &s.value)))?;
        unique_values(
            "medication",
            self.medication.iter().map(|m| (&m.label, &m.value)),
        )?;

        if self.frequency_sets.len() != FREQUENCY_SET_COUNT {
            return Err(format!(
                "expected {FREQUENCY_SET_COUNT} frequency sets, found {}",
                self.frequency_sets.len()
            ));
        }

        Ok(())
    }
}

fn unique_values<'a>(
    list: &str,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<(), String> {
    let mut seen = HashSet::new();
    for (label, value) in entries {
        if label.trim().is_empty() || value.trim().is_empty() {
            return Err(format!("{list}: entries need a label and a value"));
        }
        // Values travel as a comma separated, trimmed query list.
        if value.contains(',') || value.trim() != value {
            return Err(format!(
                "{list}: value '{value}' must not contain commas or surrounding spaces"
            ));
        }
        if !seen.insert(value.as_str()) {
            return Err(format!("{list}: duplicate value '{value}'"));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteInfo {
    pub path: String,
    pub label: String,
    pub screen: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub date: String,
    pub dataset: String,
    pub rows: Vec<FrequencyRow>,
}
