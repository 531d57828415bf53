//! Command handlers.
//!
//! `import` and `new` share [`create_project`]: they differ only in the
//! [`ProjectRequest`] they build.

pub mod config;
pub mod import;
pub mod new;

use std::io;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::info;

use chainforge_adapters::{GradleProjectGenerator, KeystoreLocator, LocalFilesystem, StreamChannel};
use chainforge_core::{
    application::{
        ImportOutcome, InteractiveOptions, ProjectImporter, ProjectRequest, ProjectRunner,
        ports::{Filesystem, LineChannel},
    },
    domain::ProjectIntent,
};

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Build the adapters, run the importer and print next steps.
pub(crate) fn create_project(
    request: ProjectRequest,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<ImportOutcome> {
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let runner = ProjectRunner::new(
        Box::new(GradleProjectGenerator::new()),
        Arc::clone(&filesystem),
    );
    let importer = ProjectImporter::new(filesystem, runner, Box::new(KeystoreLocator::new()));

    let verb = match request.intent {
        ProjectIntent::New => "Creating",
        ProjectIntent::Import => "Importing",
    };
    let spinner = output.spinner(format!("{verb} project..."));
    let mut prompts = InteractiveOptions::new(SpinnerChannel::new(
        StreamChannel::stdio(),
        spinner.clone(),
    ));

    let result = importer.run(request, &mut prompts);
    spinner.finish_and_clear();
    let outcome = result.map_err(CliError::Core)?;

    let config = &outcome.config;
    info!(
        project = %config.project_name(),
        files = outcome.report.files_written,
        "Project created"
    );

    output.success(&format!(
        "Project '{}' created at {}",
        config.project_name(),
        outcome.report.root.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.header("Next steps:")?;
        output.print(&format!("  cd {}", outcome.report.root.display()))?;
        output.print("  ./gradlew build")?;
        if config.language().uses_wallet() {
            output.print("  ./gradlew run")?;
        } else {
            output.print("  WALLET_PATH=<keystore.json> WALLET_PASSWORD=<password> ./gradlew run")?;
        }
    }

    Ok(outcome)
}

/// Line channel that hides the spinner while a prompt is on screen.
struct SpinnerChannel<C> {
    inner: C,
    spinner: ProgressBar,
}

impl<C> SpinnerChannel<C> {
    fn new(inner: C, spinner: ProgressBar) -> Self {
        Self { inner, spinner }
    }
}

impl<C: LineChannel> LineChannel for SpinnerChannel<C> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let inner = &mut self.inner;
        self.spinner.suspend(|| inner.write_line(line))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let inner = &mut self.inner;
        self.spinner.suspend(|| inner.read_line())
    }
}
