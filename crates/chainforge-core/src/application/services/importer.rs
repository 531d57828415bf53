//! Project Importer - the phase machine behind `import` and `new`.
//!
//! ```text
//! flags ──► resolve language ──► fill (prompts) ──► validate ──► overwrite? ──► run
//! ```
//!
//! Each phase runs once, in order. A failure in any phase ends the command
//! before the next one starts.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LineChannel, WalletLocator},
        services::{
            interactive::InteractiveOptions,
            runner::{GenerationReport, ProjectRunner},
        },
    },
    domain::{
        InputVerifier, LanguageFlags, ProjectConfig, ProjectIntent, TargetLanguage,
        WalletCredentials,
    },
    error::CoreResult,
};

/// Raw command-line input for one project creation.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub intent: ProjectIntent,
    pub languages: LanguageFlags,
    pub project_name: Option<String>,
    pub package_name: Option<String>,
    pub output_dir: PathBuf,
    pub solidity_path: Option<PathBuf>,
    pub generate_tests: bool,
    /// Wallet from the tool configuration. Used as-is in flag mode and as
    /// the prompt default in interactive mode.
    pub default_wallet: WalletCredentials,
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub config: ProjectConfig,
    pub report: GenerationReport,
}

/// Values gathered before validation.
struct Draft {
    project_name: Option<String>,
    package_name: Option<String>,
    output_dir: PathBuf,
    solidity_path: Option<PathBuf>,
    generate_tests: bool,
    wallet: WalletCredentials,
}

pub struct ProjectImporter {
    filesystem: Arc<dyn Filesystem>,
    runner: ProjectRunner,
    wallets: Box<dyn WalletLocator>,
}

impl ProjectImporter {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: ProjectRunner,
        wallets: Box<dyn WalletLocator>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            wallets,
        }
    }

    /// Resolve, validate and generate one project.
    #[instrument(
        skip_all,
        fields(intent = %request.intent, output = %request.output_dir.display())
    )]
    pub fn run<C: LineChannel>(
        &self,
        request: ProjectRequest,
        prompts: &mut InteractiveOptions<C>,
    ) -> CoreResult<ImportOutcome> {
        let language = request.languages.resolve()?;
        debug!(%language, "Language resolved");

        let intent = request.intent;
        let interactive = request.project_name.is_none() && request.package_name.is_none();

        let mut draft = Draft {
            project_name: request.project_name,
            package_name: request.package_name,
            output_dir: request.output_dir,
            solidity_path: request.solidity_path,
            generate_tests: request.generate_tests,
            wallet: request.default_wallet,
        };

        if interactive {
            info!("No project name or package given, prompting");
            self.fill_interactively(&mut draft, intent, language, prompts)?;
        }

        // `new` always starts from the bundled sample and always has tests.
        if intent == ProjectIntent::New {
            draft.solidity_path = None;
            draft.generate_tests = true;
        }

        InputVerifier::validate(draft.project_name.as_deref(), draft.package_name.as_deref())?;
        let config = ProjectConfig::new(
            draft.project_name.unwrap_or_default(),
            draft.package_name.unwrap_or_default(),
            draft.output_dir,
            draft.solidity_path,
            draft.generate_tests,
            language,
        )?;

        self.confirm_overwrite(&config, prompts)?;

        let report = self.runner.run(&config, Some(&draft.wallet))?;
        Ok(ImportOutcome { config, report })
    }

    fn fill_interactively<C: LineChannel>(
        &self,
        draft: &mut Draft,
        intent: ProjectIntent,
        language: TargetLanguage,
        prompts: &mut InteractiveOptions<C>,
    ) -> CoreResult<()> {
        let name = prompts.project_name()?;
        draft.package_name = Some(prompts.package_name()?);

        if intent == ProjectIntent::Import {
            draft.solidity_path = prompts.solidity_project_path()?;
        }

        if language.uses_wallet() {
            let answered = prompts.wallet_location(&draft.wallet.path)?;
            draft.wallet = self.wallets.locate(&answered.path, &answered.password)?;
        }

        if let Some(destination) = prompts.project_destination(&name)? {
            draft.output_dir = destination;
        }

        if intent == ProjectIntent::Import {
            draft.generate_tests = prompts.user_wants_tests()?;
        }

        draft.project_name = Some(name);
        Ok(())
    }

    fn confirm_overwrite<C: LineChannel>(
        &self,
        config: &ProjectConfig,
        prompts: &mut InteractiveOptions<C>,
    ) -> CoreResult<()> {
        let root = config.project_root();
        if !self.filesystem.is_dir(&root) {
            return Ok(());
        }

        if prompts.override_existing_project(&root)? {
            info!(path = %root.display(), "Removing existing project");
            self.filesystem.remove_dir_all(&root)?;
            Ok(())
        } else {
            info!(path = %root.display(), "Overwrite declined");
            Err(ApplicationError::Cancelled { path: root }.into())
        }
    }
}
