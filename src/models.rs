use serde::{Deserialize, Serialize};

use crate::classifier::SuggestionRecord;

// Generate API request format
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

// Generate API response format
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GenerateResponse {
    pub cached: bool,
    pub response: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub success: bool,
    pub detected_items: Vec<String>,
    pub suggestions: SuggestionRecord,
}

// One detected label or localized object, ranked by the vision service
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Label {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            score: None,
        }
    }
}
