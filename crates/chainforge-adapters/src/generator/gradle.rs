//! Gradle project generator with per-contract bindings.

use std::path::{Path, PathBuf};

use chainforge_core::{
    application::ports::BindingGenerator,
    domain::{
        Permissions, ProjectConfig, ProjectStructure, RenderContext, TargetLanguage,
        WalletCredentials,
    },
    error::CoreResult,
};
use chrono::{Datelike, Local};
use tracing::{debug, info, instrument};

use super::{
    solidity::{self, ContractDecl, SoliditySource},
    templates,
};

/// Produces a Gradle project from Solidity sources.
#[derive(Debug, Clone)]
pub struct GradleProjectGenerator {
    year: i32,
}

impl GradleProjectGenerator {
    pub fn new() -> Self {
        Self {
            year: Local::now().year(),
        }
    }

    /// Fix the year rendered into generated files.
    pub fn with_year(year: i32) -> Self {
        Self { year }
    }

    fn base_context(
        &self,
        config: &ProjectConfig,
        wallet: Option<&WalletCredentials>,
    ) -> RenderContext {
        let (wallet_path, wallet_password) = match wallet {
            Some(w) => (w.path.display().to_string(), w.password.clone()),
            None => (String::new(), String::new()),
        };

        RenderContext::for_project(config)
            .with_variable("YEAR", self.year.to_string())
            .with_variable("WALLET_PATH", escape_literal(&wallet_path, config.language()))
            .with_variable(
                "WALLET_PASSWORD",
                escape_literal(&wallet_password, config.language()),
            )
    }
}

impl Default for GradleProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingGenerator for GradleProjectGenerator {
    #[instrument(skip_all, fields(project = %config.project_name(), language = %config.language()))]
    fn generate(
        &self,
        config: &ProjectConfig,
        wallet: Option<WalletCredentials>,
    ) -> CoreResult<ProjectStructure> {
        let sources = solidity::load_sources(config.solidity_import_path())?;
        let contracts = solidity::bindable_contracts(&sources)?;
        debug!(
            sources = sources.len(),
            contracts = contracts.len(),
            "Solidity sources scanned"
        );

        let language = config.language();
        let lang_templates = templates::for_language(language);
        let contract_names = contracts
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let ctx = self
            .base_context(config, wallet.as_ref())
            .with_variable("CONTRACT_NAMES", contract_names);

        let mut structure = ProjectStructure::new(config.project_root());
        let file = |s: &mut ProjectStructure, path: PathBuf, template: &str| {
            s.add_file(path, ctx.render(template), Permissions::default());
        };

        file(&mut structure, "settings.gradle".into(), templates::SETTINGS_GRADLE);
        file(&mut structure, "build.gradle".into(), lang_templates.build_gradle);
        structure.add_file(
            "gradlew",
            ctx.render(templates::GRADLEW),
            Permissions::executable(),
        );
        file(
            &mut structure,
            Path::new("gradle/wrapper/gradle-wrapper.properties").into(),
            templates::GRADLE_WRAPPER_PROPERTIES,
        );
        file(&mut structure, ".gitignore".into(), templates::GITIGNORE);
        file(&mut structure, "README.md".into(), templates::README);

        add_sources(&mut structure, &sources);

        let ext = language.file_extension();
        let main_dir = source_root("main", language, config);
        file(
            &mut structure,
            main_dir.join(format!("{}.{ext}", config.project_name())),
            lang_templates.main_class,
        );

        let binding_dir = main_dir.join("generated").join("contracts");
        let test_dir = source_root("test", language, config)
            .join("generated")
            .join("contracts");

        for contract in &contracts {
            let contract_ctx = contract_context(&ctx, contract, &sources, language);

            structure.add_file(
                binding_dir.join(format!("{}.{ext}", contract.name)),
                contract_ctx.render(lang_templates.binding),
                Permissions::default(),
            );

            if config.generate_tests() {
                structure.add_file(
                    test_dir.join(format!("{}Test.{ext}", contract.name)),
                    contract_ctx.render(lang_templates.binding_test),
                    Permissions::default(),
                );
            }
        }

        if !config.generate_tests() {
            structure.add_directory(source_root("test", language, config));
        }

        info!(
            contracts = contracts.len(),
            entries = structure.entry_count(),
            "Project generated"
        );
        Ok(structure)
    }
}

/// `src/<set>/<lang>/<package path>`
fn source_root(set: &str, language: TargetLanguage, config: &ProjectConfig) -> PathBuf {
    Path::new("src")
        .join(set)
        .join(language.source_dir())
        .join(config.package_path())
}

fn add_sources(structure: &mut ProjectStructure, sources: &[SoliditySource]) {
    let dir = Path::new("src").join("main").join("solidity");
    for source in sources {
        structure.add_file(
            dir.join(&source.relative_path),
            source.content.clone(),
            Permissions::default(),
        );
    }
}

fn contract_context(
    base: &RenderContext,
    contract: &ContractDecl,
    sources: &[SoliditySource],
    language: TargetLanguage,
) -> RenderContext {
    let functions = contract
        .functions
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let source = sources
        .iter()
        .find(|s| {
            solidity::scan_declarations(&s.content)
                .iter()
                .any(|d| d.name == contract.name)
        })
        .map(|s| s.relative_path.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();

    base.clone()
        .with_variable("CONTRACT_NAME", contract.name.as_str())
        .with_variable("CONTRACT_FUNCTIONS", functions)
        .with_variable("CONTRACT_SOURCE", escape_literal(&source, language))
}

/// Escape a value for use inside a double-quoted string literal.
fn escape_literal(value: &str, language: TargetLanguage) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' if language == TargetLanguage::Kotlin => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(language: TargetLanguage, tests: bool, sources: Option<PathBuf>) -> ProjectConfig {
        ProjectConfig::new("Test", "org.com", "/out", sources, tests, language).unwrap()
    }

    fn generate(config: &ProjectConfig, wallet: Option<WalletCredentials>) -> ProjectStructure {
        GradleProjectGenerator::with_year(2026)
            .generate(config, wallet)
            .unwrap()
    }

    #[test]
    fn kotlin_sample_layout() {
        let cfg = config(TargetLanguage::Kotlin, true, None);
        let s = generate(&cfg, Some(WalletCredentials::new("/keys/w.json", "pw")));

        assert_eq!(s.root(), Path::new("/out/Test"));
        for path in [
            "settings.gradle",
            "build.gradle",
            "gradlew",
            "gradle/wrapper/gradle-wrapper.properties",
            ".gitignore",
            "README.md",
            "src/main/solidity/HelloWorld.sol",
            "src/main/kotlin/org/com/Test.kt",
            "src/main/kotlin/org/com/generated/contracts/HelloWorld.kt",
            "src/main/kotlin/org/com/generated/contracts/Mortal.kt",
            "src/test/kotlin/org/com/generated/contracts/HelloWorldTest.kt",
        ] {
            assert!(s.file(path).is_some(), "missing {path}");
        }
        assert!(s.file("gradlew").unwrap().permissions.executable_flag());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn kotlin_entry_point_embeds_wallet() {
        let cfg = config(TargetLanguage::Kotlin, false, None);
        let s = generate(&cfg, Some(WalletCredentials::new("/keys/w.json", "pa$$")));

        let main = &s.file("src/main/kotlin/org/com/Test.kt").unwrap().content;
        assert!(main.starts_with("package org.com\n"));
        assert!(main.contains(r#"WALLET_PATH = "/keys/w.json""#));
        assert!(main.contains(r#"WALLET_PASSWORD = "pa\$\$""#));
        assert!(main.contains("Contracts: Mortal, HelloWorld"));
    }

    #[test]
    fn java_layout_uses_java_sources() {
        let cfg = config(TargetLanguage::Java, true, None);
        let s = generate(&cfg, None);

        let main = &s.file("src/main/java/org/com/Test.java").unwrap().content;
        assert!(main.contains("public class Test"));
        assert!(main.contains("System.getenv(\"WALLET_PATH\")"));

        let binding = &s
            .file("src/main/java/org/com/generated/contracts/HelloWorld.java")
            .unwrap()
            .content;
        assert!(binding.contains("package org.com.generated.contracts;"));
        assert!(binding.contains(r#"List.of("newGreeting", "greeting")"#));
        assert!(binding.contains(r#"SOURCE = "HelloWorld.sol""#));

        let build = &s.file("build.gradle").unwrap().content;
        assert!(build.contains("mainClass = 'org.com.Test'"));
    }

    #[test]
    fn tests_are_optional() {
        let cfg = config(TargetLanguage::Kotlin, false, None);
        let s = generate(&cfg, None);

        assert!(s.files().all(|f| !f.path.starts_with("src/test")));
        assert!(
            s.directories()
                .any(|d| d.path == Path::new("src/test/kotlin/org/com"))
        );
    }

    #[test]
    fn imported_directory_is_copied_and_bound() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("token")).unwrap();
        fs::write(
            tmp.path().join("token/Token.sol"),
            "contract Token { function transfer(address to) public {} }",
        )
        .unwrap();
        fs::write(tmp.path().join("IERC.sol"), "interface IERC { }").unwrap();

        let cfg = config(TargetLanguage::Kotlin, true, Some(tmp.path().to_path_buf()));
        let s = generate(&cfg, None);

        assert!(s.file("src/main/solidity/token/Token.sol").is_some());
        assert!(s.file("src/main/solidity/IERC.sol").is_some());
        assert!(
            s.file("src/main/kotlin/org/com/generated/contracts/IERC.kt")
                .is_none()
        );

        let binding = &s
            .file("src/main/kotlin/org/com/generated/contracts/Token.kt")
            .unwrap()
            .content;
        assert!(binding.contains(r#"listOf("transfer")"#));
        assert!(binding.contains(r#"SOURCE = "token/Token.sol""#));
    }

    #[cfg(unix)]
    #[test]
    fn source_paths_are_escaped_in_bindings() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("we\"ird$dir");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Token.sol"), "contract Token { function mint() public {} }").unwrap();

        let kotlin = config(TargetLanguage::Kotlin, false, Some(tmp.path().to_path_buf()));
        let s = generate(&kotlin, None);
        let binding = &s
            .file("src/main/kotlin/org/com/generated/contracts/Token.kt")
            .unwrap()
            .content;
        assert!(binding.contains(r#"SOURCE = "we\"ird\$dir/Token.sol""#));

        let java = config(TargetLanguage::Java, false, Some(tmp.path().to_path_buf()));
        let s = generate(&java, None);
        let binding = &s
            .file("src/main/java/org/com/generated/contracts/Token.java")
            .unwrap()
            .content;
        assert!(binding.contains(r#"SOURCE = "we\"ird$dir/Token.sol";"#));
    }

    #[test]
    fn missing_sources_fail_generation() {
        let cfg = config(
            TargetLanguage::Java,
            false,
            Some(PathBuf::from("/definitely/not/here")),
        );
        let err = GradleProjectGenerator::with_year(2026)
            .generate(&cfg, None)
            .unwrap_err();
        assert!(err.to_string().contains("No solidity sources found"));
    }

    #[test]
    fn readme_mentions_year_and_package() {
        let cfg = config(TargetLanguage::Java, false, None);
        let s = generate(&cfg, None);
        let readme = &s.file("README.md").unwrap().content;
        assert!(readme.starts_with("# Test\n"));
        assert!(readme.contains("org.com"));
        assert!(readme.contains("2026"));
    }

    #[test]
    fn escaping_rules_differ_per_language() {
        assert_eq!(escape_literal(r#"a"b\c$"#, TargetLanguage::Java), r#"a\"b\\c$"#);
        assert_eq!(escape_literal("$x", TargetLanguage::Kotlin), r"\$x");
    }
}
