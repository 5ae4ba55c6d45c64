use crate::models::{
    Doctor, Fixtures, FrequencyDataset, FrequencyRow, MedicationEntry, Notification,
    PersonalDetails, Profile, SymptomEntry, UploadSpec,
};

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            symptoms: vec![
                symptom("Headache", "headache"),
                symptom("Fatigue", "fatigue"),
                symptom("Nausea", "nausea"),
                symptom("Dizziness", "dizziness"),
                symptom("Shortness of breath", "shortness-of-breath"),
                symptom("Chest pain", "chest-pain"),
            ],
            medication: vec![
                medication("Amlodipine", "amlodipine"),
                medication("Vitamin D", "vitamin-d"),
            ],
            notifications: vec![
                Notification {
                    title: "Refill reminder".into(),
                    caption: "Your Amlodipine prescription runs out in 3 days.".into(),
                },
                Notification {
                    title: "Pharmacy pickup".into(),
                    caption: "Vitamin D is ready to collect from your pharmacy.".into(),
                },
            ],
            frequency_sets: vec![
                dataset(
                    "Sample A",
                    &[("Headache", 4), ("Fatigue", 7), ("Nausea", 1), ("Dizziness", 2)],
                ),
                dataset(
                    "Sample B",
                    &[("Headache", 1), ("Fatigue", 3), ("Shortness of breath", 2)],
                ),
                dataset(
                    "Sample C",
                    &[("Fatigue", 5), ("Chest pain", 1), ("Dizziness", 3), ("Nausea", 2)],
                ),
            ],
            profile: Profile {
                name: "John Doe".into(),
                details: PersonalDetails {
                    full_name: "John Doe".into(),
                    age: 60,
                    sex: "M".into(),
                    email: "john@gmail.com".into(),
                    phone: "0400 000 001".into(),
                },
                medical_history: vec![
                    "2006 - current: high blood pressure".into(),
                    "2014: hernia removal surgery".into(),
                ],
                current_medication: vec!["2006 - current: Amlodipine".into()],
                doctors: vec![
                    Doctor {
                        name: "Dr Dohn Joe".into(),
                        number: "9423 5123".into(),
                        clinic: "Sydney Medical Centre".into(),
                    },
                    Doctor {
                        name: "Dr Jane Koe".into(),
                        number: "9447 5156".into(),
                        clinic: "Chatswood Medical Centre".into(),
                    },
                ],
            },
            upload: UploadSpec {
                accept: vec![".jpg".into(), ".png".into()],
                button_label: "Add files".into(),
                label_title: "Upload".into(),
                label_description: "only .jpg files at 500mb or less".into(),
            },
        }
    }
}

fn symptom(label: &str, value: &str) -> SymptomEntry {
    SymptomEntry {
        label: label.into(),
        value: value.into(),
    }
}

fn medication(label: &str, value: &str) -> MedicationEntry {
    MedicationEntry {
        label: label.into(),
        value: value.into(),
    }
}

fn dataset(name: &str, rows: &[(&str, u32)]) -> FrequencyDataset {
    FrequencyDataset {
        name: name.into(),
        rows: rows
            .iter()
            .map(|(symptom, occurrences)| FrequencyRow {
                symptom: (*symptom).into(),
                occurrences: *occurrences,
            })
            .collect(),
    }
}
