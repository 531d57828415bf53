//! Interactive Options - prompt the user for missing configuration.
//!
//! Every question is one line out, one line back over a [`LineChannel`].
//! A blank answer or end of input selects the prompt's default; nothing is
//! ever re-asked.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::LineChannel},
    domain::WalletCredentials,
    error::CoreResult,
};

pub const DEFAULT_PROJECT_NAME: &str = "Web3App";
pub const DEFAULT_PACKAGE_NAME: &str = "io.chainforge";

/// Line-oriented prompts for project configuration.
pub struct InteractiveOptions<C> {
    channel: C,
    working_dir: PathBuf,
}

impl<C: LineChannel> InteractiveOptions<C> {
    pub fn new(channel: C) -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            channel,
            working_dir,
        }
    }

    /// Directory shown as the destination default.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn project_name(&mut self) -> CoreResult<String> {
        let answer = self.ask(&format!(
            "Please enter the project name [{DEFAULT_PROJECT_NAME}]:"
        ))?;
        Ok(answer.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()))
    }

    pub fn package_name(&mut self) -> CoreResult<String> {
        let answer = self.ask(&format!(
            "Please enter the package name for your project [{DEFAULT_PACKAGE_NAME}]:"
        ))?;
        Ok(answer.unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()))
    }

    /// `None` selects the bundled sample contract.
    pub fn solidity_project_path(&mut self) -> CoreResult<Option<PathBuf>> {
        let answer = self.ask(
            "Please enter the path to your solidity file/folder [leave empty for the HelloWorld sample]:",
        )?;
        Ok(answer.map(PathBuf::from))
    }

    /// `None` keeps whatever output directory was already configured.
    pub fn project_destination(&mut self, project_name: &str) -> CoreResult<Option<PathBuf>> {
        let answer = self.ask(&format!(
            "Please enter the destination of your project [{}]:",
            self.working_dir.display()
        ))?;
        debug!(project = project_name, destination = ?answer, "Destination answered");
        Ok(answer.map(PathBuf::from))
    }

    pub fn user_wants_tests(&mut self) -> CoreResult<bool> {
        self.confirm(
            "Would you like to generate unit tests for your contracts [Y/n]?",
            true,
        )
    }

    /// Path and password of the wallet to wire into the project.
    ///
    /// The returned path is whatever the user typed (or the default); it is
    /// not checked here.
    pub fn wallet_location(&mut self, default_path: &Path) -> CoreResult<WalletCredentials> {
        let path = self
            .ask(&format!(
                "Please enter the path to your wallet file [{}]:",
                default_path.display()
            ))?
            .map(PathBuf::from)
            .unwrap_or_else(|| default_path.to_path_buf());

        let password = self
            .ask("Please enter the wallet password [leave empty if there's no password]:")?
            .unwrap_or_default();

        Ok(WalletCredentials::new(path, password))
    }

    pub fn override_existing_project(&mut self, path: &Path) -> CoreResult<bool> {
        self.confirm(
            &format!(
                "Looks like the project exists at {}. Would you like to overwrite it [y/N]?",
                path.display()
            ),
            false,
        )
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Trimmed answer, `None` when blank or at end of input.
    fn ask(&mut self, question: &str) -> CoreResult<Option<String>> {
        let line = self
            .channel
            .prompt(question)
            .map_err(ApplicationError::from)?;

        Ok(line
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()))
    }

    fn confirm(&mut self, question: &str, default: bool) -> CoreResult<bool> {
        let answer = self.ask(question)?.map(|a| a.to_ascii_lowercase());
        Ok(match answer.as_deref() {
            Some("y" | "yes") => true,
            Some("n" | "no") => false,
            _ => default,
        })
    }
}

#[cfg(test)]
impl InteractiveOptions<testing::ScriptedChannel> {
    pub(crate) fn channel_prompts(&self) -> &[String] {
        &self.channel.prompts
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::io;

    use crate::application::ports::LineChannel;

    /// Replays canned answers and records every prompt.
    #[derive(Debug, Default)]
    pub struct ScriptedChannel {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedChannel {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineChannel for ScriptedChannel {
        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.prompts.push(line.to_string());
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.answers.pop_front())
        }
    }
}
