//! Response schema declared to the model.
//!
//! Mirrors `models::resume` field-for-field. Types use the OpenAPI subset the
//! Gemini `responseSchema` accepts.

use serde_json::{json, Value};

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

fn resume_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "personalInfo": {
                "type": "OBJECT",
                "properties": {
                    "fullName": { "type": "STRING" },
                    "email": { "type": "STRING" },
                    "phone": { "type": "STRING" },
                    "location": { "type": "STRING" },
                    "linkedin": { "type": "STRING" },
                    "portfolio": { "type": "STRING" }
                },
                "required": ["fullName", "email"]
            },
            "summary": { "type": "STRING" },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "position": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "achievements": string_list()
                    }
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "institution": { "type": "STRING" },
                        "degree": { "type": "STRING" },
                        "year": { "type": "STRING" },
                        "location": { "type": "STRING" }
                    }
                }
            },
            "skills": string_list(),
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "technologies": string_list()
                    }
                }
            }
        },
        "required": ["personalInfo"]
    })
}

/// Schema of the full optimization response.
pub fn optimization_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "optimizedResume": resume_schema(),
            "matchScore": { "type": "NUMBER" },
            "extractedKeywords": string_list(),
            "missingKeywords": string_list(),
            "improvementSuggestions": string_list()
        },
        "required": [
            "optimizedResume",
            "matchScore",
            "extractedKeywords",
            "missingKeywords",
            "improvementSuggestions"
        ]
    })
}
