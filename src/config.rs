use clap::Parser;
use std::time::Duration;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "product-ai-gateway")]
#[command(about = "Caching gateway for completion and image labeling APIs")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "GATEWAY_PORT", default_value_t = 8080)]
    pub port: u16,

    // Static key callers must send in the x-api-key header
    #[arg(long, env = "GATEWAY_API_KEY")]
    pub api_key: String,

    // Chat completions endpoint
    #[arg(long, env = "COMPLETION_URL", default_value = "https://api.openai.com/v1/chat/completions")]
    pub completion_url: String,

    #[arg(long, env = "COMPLETION_API_KEY", default_value = "")]
    pub completion_key: String,

    #[arg(long, env = "COMPLETION_MODEL", default_value = "gpt-4o-mini")]
    pub completion_model: String,

    // Image annotate endpoint
    #[arg(long, env = "VISION_URL", default_value = "https://vision.googleapis.com/v1/images:annotate")]
    pub vision_url: String,

    // Bearer token for the vision API (minted outside the gateway)
    #[arg(long, env = "VISION_ACCESS_TOKEN", default_value = "")]
    pub vision_token: String,

    // Upstream request timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT", default_value_t = 30)]
    pub upstream_timeout: u64,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}
