use std::collections::HashMap;

use crate::domain::entities::project_config::ProjectConfig;

/// Variables available to project templates.
///
/// ## Standard Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "MyDapp" | User input |
/// | `PACKAGE_NAME` | "org.com" | User input |
/// | `LANGUAGE` | "kotlin" | Resolved flags |
///
/// Adapters add their own (`YEAR`, `WALLET_PATH`, `CONTRACT_NAME`, ...)
/// through [`RenderContext::with_variable`].
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), project_name.into());
        Self { variables }
    }

    /// Context seeded with everything a [`ProjectConfig`] knows.
    pub fn for_project(config: &ProjectConfig) -> Self {
        Self::new(config.project_name())
            .with_variable("PACKAGE_NAME", config.package_name())
            .with_variable("LANGUAGE", config.language().as_str())
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// Later values override earlier ones, built-ins included.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// The template is scanned once, left to right. Substituted values are
    /// copied verbatim and never scanned again. Unknown placeholders are
    /// left untouched.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TargetLanguage;

    #[test]
    fn renders_known_and_keeps_unknown_placeholders() {
        let ctx = RenderContext::new("Test").with_variable("PACKAGE_NAME", "org.com");
        assert_eq!(
            ctx.render("package {{PACKAGE_NAME}}; class {{PROJECT_NAME}} {{MISSING}}"),
            "package org.com; class Test {{MISSING}}"
        );
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        // Each context gets its own hasher seed, so build a fresh one per
        // iteration to cover different iteration orders.
        for _ in 0..50 {
            let ctx = RenderContext::new("Test")
                .with_variable("WALLET_PASSWORD", "p{{PROJECT_NAME}}w")
                .with_variable("WALLET_PATH", "/keys/{{WALLET_PASSWORD}}.json");
            assert_eq!(
                ctx.render(r#"PW="{{WALLET_PASSWORD}}" P="{{WALLET_PATH}}" N={{PROJECT_NAME}}"#),
                r#"PW="p{{PROJECT_NAME}}w" P="/keys/{{WALLET_PASSWORD}}.json" N=Test"#
            );
        }
    }

    #[test]
    fn unterminated_and_adjacent_braces() {
        let ctx = RenderContext::new("Test");
        assert_eq!(ctx.render("{{PROJECT_NAME}}{{PROJECT_NAME}}"), "TestTest");
        assert_eq!(ctx.render("x {{PROJECT_NAME"), "x {{PROJECT_NAME");
        assert_eq!(ctx.render("{ {{PROJECT_NAME}} }"), "{ Test }");
    }

    #[test]
    fn seeded_from_project_config() {
        let cfg = ProjectConfig::new("Test", "org.com", ".", None, false, TargetLanguage::Java).unwrap();
        let ctx = RenderContext::for_project(&cfg);
        assert_eq!(ctx.get("PROJECT_NAME"), Some("Test"));
        assert_eq!(ctx.get("PACKAGE_NAME"), Some("org.com"));
        assert_eq!(ctx.get("LANGUAGE"), Some("java"));
    }
}
