use super::generator::Generator;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned replies in order and remembers what it was asked.
/// `Err` entries and an exhausted script both fail the call.
#[derive(Default)]
pub struct Canned {
    replies: Mutex<VecDeque<Result<String, String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl Canned {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Result<&'static str, &'static str>>,
    {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(String::from).map_err(String::from))
                    .collect(),
            ),
            prompts: Mutex::default(),
        }
    }
}

#[async_trait::async_trait]
impl Generator for Canned {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(e)) => Err(anyhow::anyhow!(e)),
            None => Err(anyhow::anyhow!("no more canned replies")),
        }
    }
}
