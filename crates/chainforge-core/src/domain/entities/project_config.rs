use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, validation::InputVerifier, value_objects::TargetLanguage};

/// Fully resolved configuration for one project generation.
///
/// Built once per command invocation, consumed once by the runner.
/// Invariant: `project_name` is a valid class name and `package_name` a
/// valid package name. Every constructor, deserialization included, goes
/// through [`ProjectConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectConfig")]
pub struct ProjectConfig {
    project_name: String,
    package_name: String,
    output_dir: PathBuf,
    solidity_import_path: Option<PathBuf>,
    generate_tests: bool,
    language: TargetLanguage,
}

/// Unchecked wire form of [`ProjectConfig`].
#[derive(Deserialize)]
struct RawProjectConfig {
    project_name: String,
    package_name: String,
    output_dir: PathBuf,
    solidity_import_path: Option<PathBuf>,
    generate_tests: bool,
    language: TargetLanguage,
}

impl TryFrom<RawProjectConfig> for ProjectConfig {
    type Error = DomainError;

    fn try_from(raw: RawProjectConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.project_name,
            raw.package_name,
            raw.output_dir,
            raw.solidity_import_path,
            raw.generate_tests,
            raw.language,
        )
    }
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        package_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        solidity_import_path: Option<PathBuf>,
        generate_tests: bool,
        language: TargetLanguage,
    ) -> Result<Self, DomainError> {
        let project_name = project_name.into();
        let package_name = package_name.into();

        InputVerifier::validate(Some(&project_name), Some(&package_name))?;

        Ok(Self {
            project_name,
            package_name,
            output_dir: output_dir.into(),
            solidity_import_path,
            generate_tests,
            language,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn solidity_import_path(&self) -> Option<&Path> {
        self.solidity_import_path.as_deref()
    }

    pub fn generate_tests(&self) -> bool {
        self.generate_tests
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    /// `<output_dir>/<project_name>`
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    /// `org.com` → `org/com`
    pub fn package_path(&self) -> PathBuf {
        self.package_name.split('.').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, package: &str) -> Result<ProjectConfig, DomainError> {
        ProjectConfig::new(name, package, "/tmp/out", None, false, TargetLanguage::Kotlin)
    }

    #[test]
    fn derived_paths() {
        let cfg = config("Test", "org.com").unwrap();
        assert_eq!(cfg.project_root(), PathBuf::from("/tmp/out/Test"));
        assert_eq!(cfg.package_path(), PathBuf::from("org").join("com"));
    }

    #[test]
    fn construction_validates_names() {
        assert_eq!(config("", "org.com"), Err(DomainError::EmptyRequiredArgs));
        assert!(matches!(
            config("my-app", "org.com"),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(matches!(
            config("Test", "org.."),
            Err(DomainError::InvalidPackageName { .. })
        ));
    }

    #[test]
    fn optional_fields_round_through_accessors() {
        let cfg = ProjectConfig::new(
            "Test",
            "org.com",
            ".",
            Some(PathBuf::from("contracts")),
            true,
            TargetLanguage::Java,
        )
        .unwrap();
        assert_eq!(cfg.solidity_import_path(), Some(Path::new("contracts")));
        assert!(cfg.generate_tests());
        assert_eq!(cfg.language(), TargetLanguage::Java);
    }

    #[test]
    fn deserialization_runs_the_verifier() {
        let valid = r#"{"project_name":"Test","package_name":"org.com","output_dir":"/tmp/out",
            "solidity_import_path":null,"generate_tests":true,"language":"kotlin"}"#;
        let cfg: ProjectConfig = serde_json::from_str(valid).unwrap();
        assert_eq!(
            cfg,
            ProjectConfig::new("Test", "org.com", "/tmp/out", None, true, TargetLanguage::Kotlin)
                .unwrap()
        );

        let reserved = valid.replace(r#""Test""#, r#""class""#);
        let err = serde_json::from_str::<ProjectConfig>(&reserved).unwrap_err();
        assert!(err.to_string().contains("class is not a valid project name"));

        let empty_package = valid.replace(r#""org.com""#, r#""""#);
        assert!(serde_json::from_str::<ProjectConfig>(&empty_package).is_err());
    }
}
