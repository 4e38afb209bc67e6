// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use intake_store::FormRecord;

#[derive(Deserialize, Serialize, Debug)]
pub struct SaveFormRequest {
    // Absent and null are equivalent; both store a record with no id.
    pub form_id: Option<String>,
    // Opaque section content keyed by section name. Shape-checked only:
    // must be an object, contents are never inspected.
    pub sections: Map<String, Value>,
    pub completed_sections: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SaveFormResponse {
    pub message: String,
}

impl From<SaveFormRequest> for FormRecord {
    fn from(req: SaveFormRequest) -> Self {
        FormRecord::new(req.form_id, req.sections, req.completed_sections)
    }
}
