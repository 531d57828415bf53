//! Solidity source discovery and a lightweight declaration scanner.
//!
//! The scanner is not a parser. It finds top-level `contract` / `library`
//! declarations and the names of the functions declared directly in their
//! bodies, which is all the bindings need.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chainforge_core::{application::ApplicationError, error::CoreError};
use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Sample contract used when no sources are given.
pub const HELLO_WORLD_SOL: &str = r#"// SPDX-License-Identifier: Apache-2.0
pragma solidity ^0.8.20;

// Modified Greeter contract. Based on example at https://www.ethereum.org/greeter.

contract Mortal {
    /* Define variable owner of the type address*/
    address owner;

    /* this function is executed at initialization and sets the owner of the contract */
    constructor() { owner = msg.sender; }

    modifier onlyOwner {
        require(msg.sender == owner);
        _;
    }

    /* Function to recover the funds on the contract */
    function kill() public onlyOwner {
        selfdestruct(payable(msg.sender));
    }
}

contract HelloWorld is Mortal {
    /* define variable greeting of the type string */
    string greet;

    /* this runs when the contract is executed */
    constructor(string memory _greet) {
        greet = _greet;
    }

    function newGreeting(string memory _greet) public onlyOwner {
        emit Modified(greet, _greet, greet, _greet);
        greet = _greet;
    }

    /* main function */
    function greeting() public view returns (string memory) {
        return greet;
    }

    event Modified(
        string indexed oldGreetingIdx, string indexed newGreetingIdx,
        string oldGreeting, string newGreeting);
}
"#;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No solidity sources found at {0}")]
    NotFound(PathBuf),

    #[error("No .sol files under {0}")]
    NoSources(PathBuf),

    #[error("No contracts declared in the solidity sources")]
    NoContracts,

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl From<ScanError> for CoreError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NotFound(path) | ScanError::NoSources(path) => {
                ApplicationError::SourcesNotFound { path }.into()
            }
            other => ApplicationError::GenerationFailed {
                reason: other.to_string(),
            }
            .into(),
        }
    }
}

/// A `.sol` file and where it goes under `src/main/solidity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoliditySource {
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Contract,
    Library,
    Interface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDecl {
    pub name: String,
    pub kind: DeclarationKind,
    pub functions: Vec<String>,
}

/// Collect sources from a `.sol` file or a directory tree.
///
/// `None` yields the bundled `HelloWorld.sol`.
#[instrument(skip_all, fields(path = ?path))]
pub fn load_sources(path: Option<&Path>) -> Result<Vec<SoliditySource>, ScanError> {
    let Some(path) = path else {
        return Ok(vec![SoliditySource {
            relative_path: PathBuf::from("HelloWorld.sol"),
            content: HELLO_WORLD_SOL.to_string(),
        }]);
    };

    if path.is_file() {
        let name = path
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| ScanError::NotFound(path.to_path_buf()))?;
        return Ok(vec![SoliditySource {
            relative_path: name,
            content: read(path)?,
        }]);
    }

    if !path.is_dir() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let file = entry.path();
        if !entry.file_type().is_file() || file.extension().is_none_or(|ext| ext != "sol") {
            continue;
        }
        // Entries from WalkDir always live under the walk root.
        let relative = file.strip_prefix(path).unwrap_or(file).to_path_buf();
        sources.push(SoliditySource {
            relative_path: relative,
            content: read(file)?,
        });
    }

    debug!(count = sources.len(), "Solidity sources found");
    if sources.is_empty() {
        return Err(ScanError::NoSources(path.to_path_buf()));
    }
    Ok(sources)
}

/// Contracts and libraries across all sources, interfaces excluded.
pub fn bindable_contracts(sources: &[SoliditySource]) -> Result<Vec<ContractDecl>, ScanError> {
    let contracts: Vec<ContractDecl> = sources
        .iter()
        .flat_map(|source| scan_declarations(&source.content))
        .filter(|decl| decl.kind != DeclarationKind::Interface)
        .collect();

    if contracts.is_empty() {
        return Err(ScanError::NoContracts);
    }
    Ok(contracts)
}

fn read(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ── Scanning ────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Open,
    Close,
}

/// Every top-level declaration in one source file, in order.
pub fn scan_declarations(source: &str) -> Vec<ContractDecl> {
    let stripped = strip_comments(source);
    let tokens = tokenize(&stripped);

    let mut found = Vec::new();
    let mut depth = 0usize;
    let mut pending: Option<ContractDecl> = None;
    let mut current: Option<ContractDecl> = None;

    let mut iter = tokens.iter().peekable();
    while let Some(token) = iter.next() {
        match token {
            Token::Open => {
                depth += 1;
                if depth == 1 {
                    current = pending.take();
                }
            }
            Token::Close => {
                depth = depth.saturating_sub(1);
                if depth == 0
                    && let Some(decl) = current.take()
                {
                    found.push(decl);
                }
            }
            Token::Word(word) if depth == 0 => {
                let kind = match *word {
                    "contract" => DeclarationKind::Contract,
                    "library" => DeclarationKind::Library,
                    "interface" => DeclarationKind::Interface,
                    _ => continue,
                };
                if let Some(Token::Word(name)) = iter.peek() {
                    pending = Some(ContractDecl {
                        name: name.to_string(),
                        kind,
                        functions: Vec::new(),
                    });
                    iter.next();
                }
            }
            Token::Word("function") if depth == 1 => {
                if let (Some(decl), Some(Token::Word(name))) = (current.as_mut(), iter.peek())
                    && !decl.functions.iter().any(|f| f == name)
                {
                    decl.functions.push(name.to_string());
                }
            }
            Token::Word(_) => {}
        }
    }

    found
}

/// Replace `//` and `/* */` comments with whitespace. String literals are
/// left intact so comment markers inside them survive.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                out.push(c);
                while let Some(inner) = chars.next() {
                    out.push(inner);
                    if inner == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if inner == c {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' => tokens.push(Token::Open),
            '}' => tokens.push(Token::Close),
            '"' | '\'' => {
                while let Some((_, inner)) = chars.next() {
                    if inner == '\\' {
                        chars.next();
                    } else if inner == c {
                        break;
                    }
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' || next == '$' {
                        end = i + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Word(&source[start..end]));
            }
            _ => {}
        }
    }

    tokens
}
