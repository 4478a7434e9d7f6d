use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use iris::lang::keywords::{self, KeywordCategory};
use iris::lang::operators;
use iris::lang::punctuation;
use iris::lang::types;
use iris::lexer::{TokenKind, tokenize};

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is a **coarse** safety net. It looks for patterns like `== "while"` or `"i32" => ...` in Rust source files
/// where callers should go through the `iris_core::lang` registries instead.
///
/// Notes:
/// - Occurrences in `crates/iris_core/src/lang/**` (the registries themselves) and in `tests/` are allowed.
/// - It is meant to catch "oops I added a string match", not to be a full lint.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = vocabulary_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer iris_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

/// Every registry spelling lexes as exactly one token of the matching kind.
#[test]
fn registry_spellings_tokenize_as_single_tokens() {
    for info in keywords::KEYWORDS {
        let expected = match info.category {
            KeywordCategory::Literal => TokenKind::Bool,
            _ => TokenKind::Keyword(info.id),
        };
        assert_single_token(info.canonical, expected);
    }
    for info in types::PRIMITIVE_TYPES {
        assert_single_token(info.canonical, TokenKind::Type(info.id));
    }
    for info in operators::OPERATORS {
        assert_single_token(info.spelling, TokenKind::Operator(info.id));
    }
    for info in punctuation::PUNCTUATION {
        assert_single_token(info.canonical, TokenKind::Punctuation(info.id));
    }
}

fn assert_single_token(spelling: &str, expected: TokenKind) {
    let (tokens, anomalies) = tokenize(spelling);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [expected, TokenKind::Eof], "spelling {spelling:?}");
    assert_eq!(tokens[0].range.size, spelling.len(), "spelling {spelling:?}");
    assert!(anomalies.is_empty(), "spelling {spelling:?} produced {anomalies:?}");
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn vocabulary_spellings() -> Vec<&'static str> {
    // Words only: symbolic spellings like "+" show up legitimately in format strings and snapshots.
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for k in keywords::KEYWORDS {
        set.insert(k.canonical);
    }
    for t in types::PRIMITIVE_TYPES {
        set.insert(t.canonical);
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/iris_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    for s in spellings {
        // - `... == "spelling"`
        // - `"spelling" => ...`
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
