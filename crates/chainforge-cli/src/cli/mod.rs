//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! `--java` and `--kotlin` are not marked as conflicting here. The importer
//! rejects the combination with its own message.

use std::path::PathBuf;

use chainforge_core::domain::LanguageFlags;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "chainforge",
    bin_name = "chainforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate JVM client projects for Solidity smart contracts",
    long_about = "Chainforge imports Solidity contracts into a ready-to-build \
                  Gradle project with Java or Kotlin bindings.",
    after_help = "EXAMPLES:\n\
        \x20 chainforge import --kotlin -n Token -p org.token -s ./contracts\n\
        \x20 chainforge import --java                 # interactive\n\
        \x20 chainforge new -n Web3App -p io.chainforge -o ~/projects\n\
        \x20 chainforge config --format toml",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import Solidity contracts into a new project.
    #[command(
        visible_alias = "i",
        about = "Import existing Solidity contracts into a new project",
        after_help = "Omit both --project-name and --package to answer the questions interactively.\n\n\
            EXAMPLES:\n\
            \x20 chainforge import -n Token -p org.token -s contracts/Token.sol\n\
            \x20 chainforge import --java -n Vault -p io.vault -s contracts -t"
    )]
    Import(ImportArgs),

    /// Create a project around the sample contract.
    #[command(
        visible_alias = "n",
        about = "Create a new project around the HelloWorld sample contract",
        after_help = "EXAMPLES:\n\
            \x20 chainforge new -n Web3App -p io.chainforge\n\
            \x20 chainforge new --java"
    )]
    New(NewArgs),

    /// Print the active configuration.
    #[command(
        about = "Print the active configuration",
        after_help = "EXAMPLES:\n\
            \x20 chainforge config\n\
            \x20 chainforge --config ./chainforge.toml config --format toml"
    )]
    Config(ConfigArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Language and naming flags shared by `import` and `new`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Generate a Java project.
    #[arg(long = "java", help = "Generate a Java project")]
    pub java: bool,

    /// Generate a Kotlin project (the default).
    #[arg(long = "kotlin", help = "Generate a Kotlin project (default)")]
    pub kotlin: bool,

    #[arg(
        short = 'n',
        long = "project-name",
        value_name = "NAME",
        help = "Project name, also the entry-point class name"
    )]
    pub project_name: Option<String>,

    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Base package name, e.g. org.example"
    )]
    pub package_name: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the project folder is created in"
    )]
    pub output_dir: PathBuf,
}

impl ProjectArgs {
    pub fn languages(&self) -> LanguageFlags {
        LanguageFlags::new(self.java, self.kotlin)
    }
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `chainforge import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Solidity file or folder to import.
    #[arg(
        short = 's',
        long = "solidity-path",
        value_name = "PATH",
        help = "Solidity file or folder (default: the HelloWorld sample)"
    )]
    pub solidity_path: Option<PathBuf>,

    /// Generate unit tests for every contract binding.
    #[arg(
        short = 't',
        long = "generate-tests",
        help = "Generate unit tests for the contract bindings"
    )]
    pub generate_tests: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `chainforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Arguments for `chainforge config`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: ConfigFormat,
}

/// Serialisation format for `config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_import_with_flags() {
        let cli = Cli::parse_from([
            "chainforge",
            "import",
            "--kotlin",
            "-n",
            "Test",
            "-p",
            "org.com",
            "-o",
            "tmp",
            "-s",
            "contracts",
            "-t",
        ]);
        let Commands::Import(args) = cli.command else {
            panic!("expected Import command");
        };
        assert_eq!(args.project.project_name.as_deref(), Some("Test"));
        assert_eq!(args.project.package_name.as_deref(), Some("org.com"));
        assert_eq!(args.project.output_dir, PathBuf::from("tmp"));
        assert_eq!(args.solidity_path, Some(PathBuf::from("contracts")));
        assert!(args.generate_tests);
        assert_eq!(args.project.languages(), LanguageFlags::new(false, true));
    }

    #[test]
    fn both_language_flags_parse() {
        // Rejected later, with the importer's message.
        let cli = Cli::try_parse_from(["chainforge", "import", "--java", "--kotlin"]).unwrap();
        let Commands::Import(args) = cli.command else {
            panic!("expected Import command");
        };
        assert_eq!(args.project.languages(), LanguageFlags::new(true, true));
    }

    #[test]
    fn empty_values_are_accepted_by_the_parser() {
        let cli = Cli::try_parse_from(["chainforge", "import", "-n=", "-p="]).unwrap();
        let Commands::Import(args) = cli.command else {
            panic!("expected Import command");
        };
        assert_eq!(args.project.project_name.as_deref(), Some(""));
        assert_eq!(args.project.package_name.as_deref(), Some(""));
    }

    #[test]
    fn output_dir_defaults_to_current_directory() {
        let cli = Cli::parse_from(["chainforge", "new"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.project.output_dir, PathBuf::from("."));
    }

    #[test]
    fn new_has_no_solidity_flag() {
        assert!(Cli::try_parse_from(["chainforge", "new", "-s", "x.sol"]).is_err());
    }

    #[test]
    fn config_format_defaults_to_json() {
        let cli = Cli::parse_from(["chainforge", "config"]);
        let Commands::Config(args) = cli.command else {
            panic!("expected Config command");
        };
        assert_eq!(args.format, ConfigFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["chainforge", "--quiet", "--verbose", "config"]);
        assert!(result.is_err());
    }
}
