use std::collections::VecDeque;

/// Where the player's raw move text comes from.
///
/// `Ok(None)` means input is exhausted and is treated like a quit signal.
pub trait Source {
    fn read(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Scripted input, consumed front to back.
impl Source for VecDeque<String> {
    fn read(&mut self, _: &str) -> anyhow::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Interactive terminal input.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct Terminal;

#[cfg(feature = "cli")]
impl Source for Terminal {
    fn read(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        use anyhow::Context;
        match dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("read move from terminal"),
        }
    }
}
