//! Built-in project templates.
//!
//! Placeholders use the `{{VARIABLE}}` syntax understood by
//! [`RenderContext`](chainforge_core::domain::RenderContext).

use chainforge_core::domain::TargetLanguage;

/// Templates that differ between Java and Kotlin projects.
#[derive(Debug, Clone, Copy)]
pub struct LanguageTemplates {
    pub build_gradle: &'static str,
    pub main_class: &'static str,
    pub binding: &'static str,
    pub binding_test: &'static str,
}

pub const fn for_language(language: TargetLanguage) -> LanguageTemplates {
    match language {
        TargetLanguage::Java => LanguageTemplates {
            build_gradle: BUILD_GRADLE_JAVA,
            main_class: MAIN_JAVA,
            binding: BINDING_JAVA,
            binding_test: BINDING_TEST_JAVA,
        },
        TargetLanguage::Kotlin => LanguageTemplates {
            build_gradle: BUILD_GRADLE_KOTLIN,
            main_class: MAIN_KOTLIN,
            binding: BINDING_KOTLIN,
            binding_test: BINDING_TEST_KOTLIN,
        },
    }
}

// ── Shared ───────────────────────────────────────────────────────────────────

pub const SETTINGS_GRADLE: &str = "rootProject.name = '{{PROJECT_NAME}}'\n";

pub const GRADLE_WRAPPER_PROPERTIES: &str = "\
distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
distributionUrl=https\\://services.gradle.org/distributions/gradle-8.7-bin.zip
networkTimeout=10000
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
";

/// Delegates to a system Gradle until `gradle wrapper` has been run once.
pub const GRADLEW: &str = r#"#!/bin/sh
# Gradle start-up script for {{PROJECT_NAME}}.
APP_HOME=$(cd "$(dirname "$0")" && pwd -P)
WRAPPER_JAR="$APP_HOME/gradle/wrapper/gradle-wrapper.jar"

if [ -f "$WRAPPER_JAR" ]; then
    exec java -classpath "$WRAPPER_JAR" org.gradle.wrapper.GradleWrapperMain "$@"
fi

if command -v gradle >/dev/null 2>&1; then
    echo "gradle-wrapper.jar not found, running 'gradle wrapper' first" >&2
    (cd "$APP_HOME" && gradle wrapper) || exit 1
    exec java -classpath "$WRAPPER_JAR" org.gradle.wrapper.GradleWrapperMain "$@"
fi

echo "ERROR: neither gradle-wrapper.jar nor a 'gradle' installation was found." >&2
exit 1
"#;

pub const GITIGNORE: &str = "\
.gradle/
build/
out/
.idea/
*.iml
.env
";

pub const README: &str = r#"# {{PROJECT_NAME}}

Smart-contract client project for `{{PACKAGE_NAME}}`, written in {{LANGUAGE}}.

Generated by chainforge, {{YEAR}}.

## Layout

- `src/main/solidity` - contract sources
- `src/main/{{LANGUAGE}}/.../generated/contracts` - one binding per contract

## Build

```sh
./gradlew build
```

## Run

```sh
./gradlew run
```
"#;

// ── Kotlin ───────────────────────────────────────────────────────────────────

const BUILD_GRADLE_KOTLIN: &str = r#"plugins {
    id 'org.jetbrains.kotlin.jvm' version '1.9.24'
    id 'application'
}

group = '{{PACKAGE_NAME}}'
version = '0.1.0'

repositories {
    mavenCentral()
}

dependencies {
    testImplementation 'org.junit.jupiter:junit-jupiter:5.10.2'
    testRuntimeOnly 'org.junit.platform:junit-platform-launcher'
}

kotlin {
    jvmToolchain(17)
}

application {
    mainClass = '{{PACKAGE_NAME}}.{{PROJECT_NAME}}Kt'
}

test {
    useJUnitPlatform()
}
"#;

const MAIN_KOTLIN: &str = r#"package {{PACKAGE_NAME}}

import java.io.File

const val WALLET_PATH = "{{WALLET_PATH}}"
const val WALLET_PASSWORD = "{{WALLET_PASSWORD}}"

fun main() {
    val wallet = File(WALLET_PATH)
    require(wallet.isFile) { "Wallet not found at ${wallet.absolutePath}" }

    println("{{PROJECT_NAME}} loaded wallet ${wallet.name}")
    println("Contracts: {{CONTRACT_NAMES}}")
}
"#;

const BINDING_KOTLIN: &str = r#"package {{PACKAGE_NAME}}.generated.contracts

/**
 * Binding for the `{{CONTRACT_NAME}}` contract.
 *
 * Generated by chainforge. Regenerate instead of editing.
 */
class {{CONTRACT_NAME}}(val address: String) {
    companion object {
        const val SOURCE = "{{CONTRACT_SOURCE}}"
        val FUNCTIONS: List<String> = listOf({{CONTRACT_FUNCTIONS}})
    }
}
"#;

const BINDING_TEST_KOTLIN: &str = r#"package {{PACKAGE_NAME}}.generated.contracts

import org.junit.jupiter.api.Assertions.assertEquals
import org.junit.jupiter.api.Test

class {{CONTRACT_NAME}}Test {
    @Test
    fun `binding lists declared functions`() {
        assertEquals(listOf({{CONTRACT_FUNCTIONS}}), {{CONTRACT_NAME}}.FUNCTIONS)
    }

    @Test
    fun `binding keeps its address`() {
        val address = "0x0000000000000000000000000000000000000000"
        assertEquals(address, {{CONTRACT_NAME}}(address).address)
    }
}
"#;

// ── Java ─────────────────────────────────────────────────────────────────────

const BUILD_GRADLE_JAVA: &str = r#"plugins {
    id 'java'
    id 'application'
}

group = '{{PACKAGE_NAME}}'
version = '0.1.0'

repositories {
    mavenCentral()
}

dependencies {
    testImplementation 'org.junit.jupiter:junit-jupiter:5.10.2'
    testRuntimeOnly 'org.junit.platform:junit-platform-launcher'
}

java {
    toolchain {
        languageVersion = JavaLanguageVersion.of(17)
    }
}

application {
    mainClass = '{{PACKAGE_NAME}}.{{PROJECT_NAME}}'
}

test {
    useJUnitPlatform()
}
"#;

const MAIN_JAVA: &str = r#"package {{PACKAGE_NAME}};

import java.io.File;

public class {{PROJECT_NAME}} {

    public static void main(String[] args) {
        String walletPath = System.getenv("WALLET_PATH");
        if (walletPath == null || walletPath.isEmpty()) {
            throw new IllegalStateException("Set WALLET_PATH (and WALLET_PASSWORD) before running");
        }
        File wallet = new File(walletPath);
        if (!wallet.isFile()) {
            throw new IllegalStateException("Wallet not found at " + wallet.getAbsolutePath());
        }

        System.out.println("{{PROJECT_NAME}} loaded wallet " + wallet.getName());
        System.out.println("Contracts: {{CONTRACT_NAMES}}");
    }
}
"#;

const BINDING_JAVA: &str = r#"package {{PACKAGE_NAME}}.generated.contracts;

import java.util.List;

/**
 * Binding for the {@code {{CONTRACT_NAME}}} contract.
 *
 * <p>Generated by chainforge. Regenerate instead of editing.
 */
public class {{CONTRACT_NAME}} {

    public static final String SOURCE = "{{CONTRACT_SOURCE}}";
    public static final List<String> FUNCTIONS = List.of({{CONTRACT_FUNCTIONS}});

    private final String address;

    public {{CONTRACT_NAME}}(String address) {
        this.address = address;
    }

    public String getAddress() {
        return address;
    }
}
"#;

const BINDING_TEST_JAVA: &str = r#"package {{PACKAGE_NAME}}.generated.contracts;

import static org.junit.jupiter.api.Assertions.assertEquals;

import java.util.List;
import org.junit.jupiter.api.Test;

class {{CONTRACT_NAME}}Test {

    @Test
    void bindingListsDeclaredFunctions() {
        assertEquals(List.of({{CONTRACT_FUNCTIONS}}), {{CONTRACT_NAME}}.FUNCTIONS);
    }

    @Test
    void bindingKeepsItsAddress() {
        String address = "0x0000000000000000000000000000000000000000";
        assertEquals(address, new {{CONTRACT_NAME}}(address).getAddress());
    }
}
"#;
