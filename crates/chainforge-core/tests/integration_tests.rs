//! Integration tests for chainforge-core through its public API.

use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chainforge_core::prelude::*;

#[derive(Default)]
struct RecordingFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    existing: Mutex<Vec<PathBuf>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, _path: &Path) -> CoreResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.files
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, _path: &Path, _executable: bool) -> CoreResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.existing.lock().unwrap().iter().any(|p| p == path)
    }

    fn remove_dir_all(&self, path: &Path) -> CoreResult<()> {
        self.existing.lock().unwrap().retain(|p| p != path);
        Ok(())
    }
}

struct EchoGenerator;

impl BindingGenerator for EchoGenerator {
    fn generate(
        &self,
        config: &ProjectConfig,
        wallet: Option<WalletCredentials>,
    ) -> CoreResult<ProjectStructure> {
        let ctx = RenderContext::for_project(config);
        let wallet_line = wallet
            .map(|w| w.path.display().to_string())
            .unwrap_or_else(|| "none".into());

        Ok(ProjectStructure::new(config.project_root())
            .with_file(
                "settings.gradle",
                ctx.render("rootProject.name = '{{PROJECT_NAME}}'"),
                Permissions::default(),
            )
            .with_file("wallet.txt", wallet_line, Permissions::default()))
    }
}

struct AcceptAnyWallet;

impl WalletLocator for AcceptAnyWallet {
    fn locate(&self, path: &Path, password: &str) -> CoreResult<WalletCredentials> {
        Ok(WalletCredentials::new(path, password))
    }
}

struct Script(VecDeque<&'static str>);

impl LineChannel for Script {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.pop_front().map(String::from))
    }
}

fn importer(fs: &Arc<RecordingFs>) -> ProjectImporter {
    let fs: Arc<dyn Filesystem> = fs.clone();
    let runner = ProjectRunner::new(Box::new(EchoGenerator), Arc::clone(&fs));
    ProjectImporter::new(fs, runner, Box::new(AcceptAnyWallet))
}

fn request(languages: LanguageFlags) -> ProjectRequest {
    ProjectRequest {
        intent: ProjectIntent::Import,
        languages,
        project_name: Some("Test".into()),
        package_name: Some("org.com".into()),
        output_dir: PathBuf::from("/out"),
        solidity_path: None,
        generate_tests: true,
        default_wallet: WalletCredentials::new("/keys/default.json", ""),
    }
}

#[test]
fn kotlin_project_carries_configured_wallet() {
    let fs = Arc::new(RecordingFs::default());
    let mut prompts = InteractiveOptions::new(Script(VecDeque::new()));

    importer(&fs)
        .run(request(LanguageFlags::new(false, true)), &mut prompts)
        .unwrap();

    let files = fs.files.lock().unwrap();
    assert_eq!(
        files.get(Path::new("/out/Test/settings.gradle")).map(String::as_str),
        Some("rootProject.name = 'Test'")
    );
    assert_eq!(
        files.get(Path::new("/out/Test/wallet.txt")).map(String::as_str),
        Some("/keys/default.json")
    );
}

#[test]
fn java_project_gets_no_wallet() {
    let fs = Arc::new(RecordingFs::default());
    let mut prompts = InteractiveOptions::new(Script(VecDeque::new()));

    importer(&fs)
        .run(request(LanguageFlags::new(true, false)), &mut prompts)
        .unwrap();

    let files = fs.files.lock().unwrap();
    assert_eq!(
        files.get(Path::new("/out/Test/wallet.txt")).map(String::as_str),
        Some("none")
    );
}

#[test]
fn both_language_flags_fail_with_usage_message() {
    let fs = Arc::new(RecordingFs::default());
    let mut prompts = InteractiveOptions::new(Script(VecDeque::new()));

    let err = importer(&fs)
        .run(request(LanguageFlags::new(true, true)), &mut prompts)
        .unwrap_err();

    assert_eq!(err.to_string(), "Must only use one of --java or --kotlin");
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn existing_project_is_kept_when_declined() {
    let fs = Arc::new(RecordingFs::default());
    fs.existing.lock().unwrap().push(PathBuf::from("/out/Test"));
    let mut prompts = InteractiveOptions::new(Script(VecDeque::from(["no"])));

    let err = importer(&fs)
        .run(request(LanguageFlags::default()), &mut prompts)
        .unwrap_err();

    assert_eq!(err.to_string(), "Project creation was canceled.");
    assert_eq!(err.category(), ErrorCategory::Cancelled);
    assert!(fs.is_dir(Path::new("/out/Test")));
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn interactive_defaults_produce_valid_project() {
    let fs = Arc::new(RecordingFs::default());
    let mut prompts =
        InteractiveOptions::new(Script(VecDeque::new())).with_working_dir("/work");

    let mut req = request(LanguageFlags::default());
    req.project_name = None;
    req.package_name = None;

    let outcome = importer(&fs).run(req, &mut prompts).unwrap();

    assert_eq!(outcome.config.project_name(), "Web3App");
    assert_eq!(outcome.config.package_name(), "io.chainforge");
    assert_eq!(outcome.config.output_dir(), Path::new("/out"));
    assert!(outcome.config.generate_tests());
}
