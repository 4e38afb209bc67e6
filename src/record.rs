// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Form record definition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One saved form submission.
///
/// `sections` is opaque to the backend: arbitrary structured content keyed
/// by section name, stored and returned byte-for-byte as JSON without any
/// interpretation. `completed_sections` preserves the caller's ordering.
/// `form_id` may be absent; records without one are stored but can never be
/// looked up again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub form_id: Option<String>,
    pub sections: Map<String, Value>,
    pub completed_sections: Vec<String>,
}

impl FormRecord {
    pub fn new(
        form_id: Option<String>,
        sections: Map<String, Value>,
        completed_sections: Vec<String>,
    ) -> Self {
        Self {
            form_id,
            sections,
            completed_sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_form_id_deserializes_to_none() {
        let record: FormRecord = serde_json::from_value(json!({
            "sections": {"personal": {"name": "Ada"}},
            "completed_sections": ["personal"]
        }))
        .unwrap();

        assert_eq!(record.form_id, None);
        assert_eq!(record.completed_sections, vec!["personal".to_string()]);
    }

    #[test]
    fn test_explicit_null_form_id_deserializes_to_none() {
        let record: FormRecord = serde_json::from_value(json!({
            "form_id": null,
            "sections": {},
            "completed_sections": []
        }))
        .unwrap();

        assert_eq!(record.form_id, None);
    }

    #[test]
    fn test_missing_sections_is_rejected() {
        let result: std::result::Result<FormRecord, _> = serde_json::from_value(json!({
            "form_id": "f1",
            "completed_sections": []
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_wrongly_typed_completed_sections_is_rejected() {
        let result: std::result::Result<FormRecord, _> = serde_json::from_value(json!({
            "form_id": "f1",
            "sections": {},
            "completed_sections": "personal"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record: FormRecord = serde_json::from_value(json!({
            "form_id": "f1",
            "sections": {},
            "completed_sections": [],
            "submitted_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.form_id, Some("f1".to_string()));
    }

    #[test]
    fn test_absent_form_id_serializes_as_null() {
        let record = FormRecord::new(None, Map::new(), Vec::new());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({"form_id": null, "sections": {}, "completed_sections": []})
        );
    }

    #[test]
    fn test_section_content_survives_round_trip() {
        let original = json!({
            "form_id": "f1",
            "sections": {
                "household": {"members": [{"name": "Ada", "age": 36}], "notes": null},
                "income": 42000
            },
            "completed_sections": ["household", "income"]
        });

        let record: FormRecord = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), original);
    }
}
