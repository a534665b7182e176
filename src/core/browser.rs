//! Hand URLs to the user's browser via the platform opener.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// How a URL gets opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: String,
    args: Vec<String>,
}

impl Launcher {
    /// Launcher from a configured command line such as `firefox --new-tab`.
    /// The URL is appended as the last argument.
    pub fn from_command(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self { program, args: parts.collect() })
    }

    /// Platform default opener
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self { program: "open".into(), args: Vec::new() }
        } else if cfg!(windows) {
            // `start` treats the first quoted argument as a window title
            Self {
                program: "cmd".into(),
                args: vec!["/C".into(), "start".into(), String::new()],
            }
        } else {
            Self { program: "xdg-open".into(), args: Vec::new() }
        }
    }

    /// Configured command when present, else the platform default
    pub fn resolve(configured: Option<&str>) -> Self {
        configured
            .and_then(Self::from_command)
            .unwrap_or_else(Self::system)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_for(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Spawn the opener for one URL without waiting on it
    pub fn open(&self, url: &str) -> Result<()> {
        debug!(program = %self.program, url, "opening");
        self.command_for(url)
            .spawn()
            .with_context(|| format!("Failed to launch '{}' for {url}", self.program))?;
        Ok(())
    }

    /// Open each URL, sleeping `delay` between launches (not after the last)
    pub fn open_all<S: AsRef<str>>(&self, urls: &[S], delay: Duration) -> Result<usize> {
        for (i, url) in urls.iter().enumerate() {
            self.open(url.as_ref())?;
            if i + 1 < urls.len() && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(urls.len())
    }
}
