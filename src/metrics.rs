use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

// Process-wide collectors, exposed on /metrics
lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "gateway_requests_total",
        "Generate and suggestion requests received, including rejected ones"
    )
    .unwrap();
    pub static ref CACHE_HITS: Counter = register_counter!(
        "gateway_completion_cache_hits_total",
        "Prompts answered from the completion cache"
    )
    .unwrap();
    pub static ref CACHE_MISSES: Counter = register_counter!(
        "gateway_completion_cache_misses_total",
        "Prompts with no cached completion"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "gateway_generate_latency_seconds",
        "Time to answer a generate request, cached or not"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge = register_gauge!(
        "gateway_completion_cache_entries",
        "Completions held by the cache store"
    )
    .unwrap();
    pub static ref SUGGESTIONS_TOTAL: Counter = register_counter!(
        "gateway_product_suggestions_total",
        "Product suggestions built from detected image labels"
    )
    .unwrap();
}
