use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientError;
use crate::models::Label;

const MAX_LABELS: u32 = 10;
const MAX_OBJECTS: u32 = 5;

/// Remote image labeling. Labels come back ranked; an empty list means
/// nothing was detected.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn detect(&self, image_url: &str) -> Result<Vec<Label>, ClientError>;
}

#[derive(Deserialize, Default)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageAnnotations>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ImageAnnotations {
    #[serde(default)]
    label_annotations: Vec<LabelAnnotation>,
    #[serde(default)]
    localized_object_annotations: Vec<ObjectAnnotation>,
    error: Option<AnnotateError>,
}

#[derive(Deserialize)]
struct LabelAnnotation {
    #[serde(default)]
    description: String,
    score: Option<f32>,
}

#[derive(Deserialize)]
struct ObjectAnnotation {
    #[serde(default)]
    name: String,
    score: Option<f32>,
}

#[derive(Deserialize)]
struct AnnotateError {
    #[serde(default)]
    message: String,
}

impl AnnotateResponse {
    // Labels first, then localized objects
    fn into_labels(self) -> Result<Vec<Label>, ClientError> {
        let Some(first) = self.responses.into_iter().next() else {
            return Ok(Vec::new());
        };
        if let Some(err) = first.error {
            return Err(ClientError::Upstream(err.message));
        }

        let labels = first.label_annotations.into_iter().map(|l| Label {
            description: l.description,
            score: l.score,
        });
        let objects = first.localized_object_annotations.into_iter().map(|o| Label {
            description: o.name,
            score: o.score,
        });
        Ok(labels.chain(objects).collect())
    }
}

pub struct GoogleVisionClient {
    client: reqwest::Client,
    url: String,
    access_token: String,
}

impl GoogleVisionClient {
    pub fn new(client: reqwest::Client, url: String, access_token: String) -> Self {
        Self {
            client,
            url,
            access_token,
        }
    }
}

fn annotate_body(image_url: &str) -> serde_json::Value {
    serde_json::json!({
        "requests": [{
            "image": { "source": { "imageUri": image_url } },
            "features": [
                { "type": "LABEL_DETECTION", "maxResults": MAX_LABELS },
                { "type": "OBJECT_LOCALIZATION", "maxResults": MAX_OBJECTS }
            ]
        }]
    })
}

#[async_trait]
impl VisionClient for GoogleVisionClient {
    async fn detect(&self, image_url: &str) -> Result<Vec<Label>, ClientError> {
        debug!(image_url, "calling vision API");

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.access_token)
            .json(&annotate_body(image_url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ClientError::Upstream(format!("status {}", res.status())));
        }

        res.json::<AnnotateResponse>().await?.into_labels()
    }
}
