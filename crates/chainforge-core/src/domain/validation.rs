use crate::domain::error::DomainError;

/// Words that can never be used as a class name or package segment.
///
/// Java keywords plus the literals `true`, `false`, `null` and the
/// single underscore, which javac reserves since Java 9.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Centralized input validation for project configuration.
///
/// Each check is pure: it returns a [`DomainError`] whose `Display` is the
/// user-facing message. Printing and exiting is the caller's job.
pub struct InputVerifier;

impl InputVerifier {
    /// Every argument must be present and contain a non-whitespace character.
    pub fn required_args_are_not_empty(args: &[Option<&str>]) -> Result<(), DomainError> {
        let all_present = args
            .iter()
            .all(|arg| arg.is_some_and(|value| !value.trim().is_empty()));

        if all_present {
            Ok(())
        } else {
            Err(DomainError::EmptyRequiredArgs)
        }
    }

    /// The project name is used verbatim as the entry-point class name.
    pub fn class_name_is_valid(name: &str) -> Result<(), DomainError> {
        check_identifier(name).map_err(|reason| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason,
        })
    }

    pub fn package_name_is_valid(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidPackageName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("package name cannot be empty".into()));
        }

        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(invalid("package segments cannot be empty".into()));
            }
            check_identifier(segment).map_err(|reason| invalid(format!("'{segment}' {reason}")))?;
        }

        Ok(())
    }

    /// Run all checks in order; the first failure wins.
    pub fn validate(project_name: Option<&str>, package_name: Option<&str>) -> Result<(), DomainError> {
        Self::required_args_are_not_empty(&[project_name, package_name])?;
        // Presence was checked above.
        let (Some(project), Some(package)) = (project_name, package_name) else {
            return Err(DomainError::EmptyRequiredArgs);
        };
        Self::class_name_is_valid(project)?;
        Self::package_name_is_valid(package)
    }
}

fn check_identifier(candidate: &str) -> Result<(), String> {
    let mut chars = candidate.chars();

    let Some(first) = chars.next() else {
        return Err("identifier cannot be empty".into());
    };

    if !is_identifier_start(first) {
        return Err(format!("cannot start with '{first}'"));
    }

    if let Some(bad) = chars.find(|c| !is_identifier_part(*c)) {
        return Err(format!("contains illegal character '{bad}'"));
    }

    if RESERVED_WORDS.contains(&candidate) {
        return Err("is a reserved word".into());
    }

    Ok(())
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
