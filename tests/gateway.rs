use async_trait::async_trait;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use product_ai_gateway::cache::{CacheEntry, Fingerprint, ResponseCache};
use product_ai_gateway::clients::{CompletionClient, VisionClient};
use product_ai_gateway::error::{ClientError, GatewayError, StoreError};
use product_ai_gateway::handlers::{generate_handler, suggestions_handler};
use product_ai_gateway::models::{GenerateRequest, Label, SuggestionRequest};
use product_ai_gateway::state::AppState;
use product_ai_gateway::store::{CacheStore, MemoryStore};

const KEY: &str = "test-key";

struct EchoCompletion {
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionClient for EchoCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("answer to {prompt}"))
    }
}

struct FailingCompletion;

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, ClientError> {
        Err(ClientError::EmptyCompletion)
    }
}

struct FixedVision {
    labels: Vec<Label>,
    calls: AtomicUsize,
}

#[async_trait]
impl VisionClient for FixedVision {
    async fn detect(&self, _image_url: &str) -> Result<Vec<Label>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.labels.clone())
    }
}

struct BrokenVision;

#[async_trait]
impl VisionClient for BrokenVision {
    async fn detect(&self, _image_url: &str) -> Result<Vec<Label>, ClientError> {
        Err(ClientError::Upstream("quota exceeded".into()))
    }
}

struct DownStore;

#[async_trait]
impl CacheStore for DownStore {
    async fn get(&self, _fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn put(&self, _entry: CacheEntry) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn len(&self) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

fn headers(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_str(key).unwrap());
    headers
}

fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().map(|n| Label::new(*n)).collect()
}

struct Harness {
    state: Arc<AppState>,
    completion: Arc<EchoCompletion>,
    vision: Arc<FixedVision>,
}

fn harness_with(store: Arc<dyn CacheStore>, detected: Vec<Label>) -> Harness {
    let completion = Arc::new(EchoCompletion {
        calls: AtomicUsize::new(0),
    });
    let vision = Arc::new(FixedVision {
        labels: detected,
        calls: AtomicUsize::new(0),
    });
    let state = Arc::new(AppState {
        api_key: KEY.to_string(),
        cache: ResponseCache::new(store),
        completion: completion.clone(),
        vision: vision.clone(),
    });
    Harness {
        state,
        completion,
        vision,
    }
}

fn harness() -> Harness {
    harness_with(Arc::new(MemoryStore::new()), Vec::new())
}

fn generate(prompt: &str) -> Json<GenerateRequest> {
    Json(GenerateRequest {
        prompt: Some(prompt.to_string()),
    })
}

fn suggest(url: &str) -> Json<SuggestionRequest> {
    Json(SuggestionRequest {
        image_url: Some(url.to_string()),
    })
}

#[tokio::test]
async fn second_generate_is_served_from_cache() {
    let h = harness();

    let Json(first) = generate_handler(State(h.state.clone()), headers(KEY), generate("tagline"))
        .await
        .unwrap();
    assert!(!first.cached);
    assert_eq!(first.response, "answer to tagline");

    let Json(second) = generate_handler(State(h.state.clone()), headers(KEY), generate("tagline"))
        .await
        .unwrap();
    assert!(second.cached);
    assert_eq!(second.response, "answer to tagline");
    assert_eq!(h.completion.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_prompts_do_not_share_entries() {
    let h = harness();
    for prompt in ["one", "two", "one"] {
        generate_handler(State(h.state.clone()), headers(KEY), generate(prompt))
            .await
            .unwrap();
    }
    assert_eq!(h.completion.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn wrong_key_is_forbidden() {
    let h = harness();

    let err = generate_handler(State(h.state.clone()), headers("nope"), generate("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Forbidden));
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

    let err = suggestions_handler(State(h.state.clone()), HeaderMap::new(), suggest("gs://a.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Forbidden));

    assert_eq!(h.completion.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.vision.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_prompt_is_rejected() {
    let h = harness();
    let err = generate_handler(
        State(h.state.clone()),
        headers(KEY),
        Json(GenerateRequest::default()),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_prompt_is_served_and_cached() {
    let h = harness();

    let Json(first) = generate_handler(State(h.state.clone()), headers(KEY), generate(""))
        .await
        .unwrap();
    assert!(!first.cached);
    assert_eq!(first.response, "answer to ");

    let Json(second) = generate_handler(State(h.state.clone()), headers(KEY), generate(""))
        .await
        .unwrap();
    assert!(second.cached);
    assert_eq!(h.completion.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unavailable_store_falls_back_to_uncached_completion() {
    let h = harness_with(Arc::new(DownStore), Vec::new());

    for _ in 0..2 {
        let Json(res) = generate_handler(State(h.state.clone()), headers(KEY), generate("p"))
            .await
            .unwrap();
        assert!(!res.cached);
        assert_eq!(res.response, "answer to p");
    }
    assert_eq!(h.completion.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_completion_is_not_cached() {
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState {
        api_key: KEY.to_string(),
        cache: ResponseCache::new(store.clone()),
        completion: Arc::new(FailingCompletion),
        vision: Arc::new(BrokenVision),
    });

    let err = generate_handler(State(state), headers(KEY), generate("p"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(store.len().await.unwrap(), 0);
}

#[tokio::test]
async fn suggestions_classify_first_five_labels() {
    let h = harness_with(
        Arc::new(MemoryStore::new()),
        labels(&["Running Shoes", "Footwear", "Sneakers", "Sportswear", "Outdoor", "Lace"]),
    );

    let Json(res) = suggestions_handler(State(h.state.clone()), headers(KEY), suggest("gs://shoe.jpg"))
        .await
        .unwrap();

    assert!(res.success);
    assert_eq!(
        res.detected_items,
        vec!["Running Shoes", "Footwear", "Sneakers", "Sportswear", "Outdoor"]
    );
    assert_eq!(res.suggestions.name, "Premium Running Shoes");
    assert_eq!(res.suggestions.category, "Clothing");
    assert_eq!(res.suggestions.tags.len(), 4);
    assert_eq!(h.vision.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn nothing_detected_yields_default_suggestion() {
    let h = harness();

    let Json(res) = suggestions_handler(State(h.state.clone()), headers(KEY), suggest("gs://blank.jpg"))
        .await
        .unwrap();

    assert!(res.detected_items.is_empty());
    assert_eq!(res.suggestions.name, "Premium Product");
    assert_eq!(res.suggestions.category, "General");
    assert_eq!(res.suggestions.price_range.min, 20);
    assert_eq!(res.suggestions.price_range.max, 100);
}

#[tokio::test]
async fn suggestions_require_image_url() {
    let h = harness();
    let err = suggestions_handler(
        State(h.state.clone()),
        headers(KEY),
        Json(SuggestionRequest::default()),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Image URL is required");
    assert_eq!(h.vision.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn vision_failure_is_internal_error() {
    let state = Arc::new(AppState {
        api_key: KEY.to_string(),
        cache: ResponseCache::new(Arc::new(MemoryStore::new())),
        completion: Arc::new(FailingCompletion),
        vision: Arc::new(BrokenVision),
    });

    let err = suggestions_handler(State(state), headers(KEY), suggest("gs://a.jpg"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.to_string(), "Failed to generate suggestions");
}
