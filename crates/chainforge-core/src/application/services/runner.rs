//! Project Runner - materialise a resolved configuration on disk.
//!
//! One runner serves every [`TargetLanguage`](crate::domain::TargetLanguage);
//! the generator adapter owns the per-language templates and layout.
//!
//! Writes are not transactional. If a write fails part way, the entries
//! already written stay where they are.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{BindingGenerator, Filesystem},
    domain::{FsEntry, ProjectConfig, ProjectStructure, WalletCredentials},
    error::{CoreError, CoreResult},
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
}

/// Drives the binding generator and writes its output.
pub struct ProjectRunner {
    generator: Box<dyn BindingGenerator>,
    filesystem: Arc<dyn Filesystem>,
}

impl ProjectRunner {
    pub fn new(generator: Box<dyn BindingGenerator>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            generator,
            filesystem,
        }
    }

    /// Generate and write the project described by `config`.
    ///
    /// `wallet` is forwarded only for languages that embed credentials.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            language = %config.language(),
            root = %config.project_root().display()
        )
    )]
    pub fn run(
        &self,
        config: &ProjectConfig,
        wallet: Option<&WalletCredentials>,
    ) -> CoreResult<GenerationReport> {
        let wallet = wallet
            .filter(|_| config.language().uses_wallet())
            .cloned();

        let structure = self.generator.generate(config, wallet)?;
        structure.validate().map_err(CoreError::Domain)?;
        debug!(entries = structure.entry_count(), "Project structure generated");

        let report = self.write_all(&structure)?;

        info!(
            files = report.files_written,
            directories = report.directories_created,
            "Project written"
        );
        Ok(report)
    }

    fn write_all(&self, structure: &ProjectStructure) -> CoreResult<GenerationReport> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut report = GenerationReport {
            root: root.to_path_buf(),
            files_written: 0,
            directories_created: 0,
        };

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                    report.directories_created += 1;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                    report.files_written += 1;
                }
            }
        }

        Ok(report)
    }
}
