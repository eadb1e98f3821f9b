use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::clients::{CompletionClient, VisionClient};

// app's shared state, built once in main and injected into handlers
pub struct AppState {
    pub api_key: String,
    pub cache: ResponseCache,
    pub completion: Arc<dyn CompletionClient>,
    pub vision: Arc<dyn VisionClient>,
}
