//! Filepath: src/infra/utils.rs
//! Small helpers shared by the command handlers.

use owo_colors::OwoColorize;

/// Terminal styling that honors `--no-color`
#[derive(Debug, Clone, Copy)]
pub struct Paint
{
    enabled: bool,
}

impl Paint
{
    pub fn new(enabled: bool) -> Self
    {
        Self { enabled }
    }

    pub fn bold(
        &self,
        text: &str,
    ) -> String
    {
        if self.enabled { text.bold().to_string() } else { text.to_string() }
    }

    pub fn dim(
        &self,
        text: &str,
    ) -> String
    {
        if self.enabled { text.dimmed().to_string() } else { text.to_string() }
    }

    pub fn green(
        &self,
        text: &str,
    ) -> String
    {
        if self.enabled { text.green().to_string() } else { text.to_string() }
    }

    pub fn cyan(
        &self,
        text: &str,
    ) -> String
    {
        if self.enabled { text.cyan().to_string() } else { text.to_string() }
    }

    pub fn yellow(
        &self,
        text: &str,
    ) -> String
    {
        if self.enabled { text.yellow().to_string() } else { text.to_string() }
    }
}
