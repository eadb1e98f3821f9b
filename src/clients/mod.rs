mod completion;
mod vision;

pub use completion::{CompletionClient, OpenAiClient};
pub use vision::{GoogleVisionClient, VisionClient};
