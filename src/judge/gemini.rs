use super::config::Config;
use super::generator::Generator;
use crate::GEMINI_URL;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Google Gemini `generateContent` client.
pub struct Gemini {
    client: reqwest::Client,
    config: Config,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, with all its parts joined.
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .filter(|t| !t.trim().is_empty())
    }
}

impl Gemini {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("build http client")?;
        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_URL, self.config.model())
    }

    async fn request(&self, prompt: &str) -> anyhow::Result<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .context("send judge request")?;
        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("judge service error (status {}): {}", status, error_text);
        }
        resp.json::<GenerateResponse>()
            .await
            .context("decode judge response")?
            .text()
            .ok_or_else(|| anyhow::anyhow!("judge response missing text"))
    }
}

#[async_trait::async_trait]
impl Generator for Gemini {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        log::debug!("judge request to {} ({} bytes)", self.config.model(), prompt.len());
        tokio::time::timeout(self.config.timeout(), self.request(prompt))
            .await
            .map_err(|_| anyhow::anyhow!("judge timed out after {:?}", self.config.timeout()))?
    }
}
