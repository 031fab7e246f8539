/// A text-generation service: prompt in, free text out.
///
/// The live implementation is [`super::Gemini`]; tests substitute canned replies.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
