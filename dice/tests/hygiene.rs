//! Hygiene checks: coding standards for the dice engine, enforced at test time
//!
//! These tests scan `dice/src` for antipatterns. Every budget is zero: the
//! engine runs inside UI event handlers and must never panic or swallow a
//! result, and it must stay free of browser bindings so it tests natively.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and a short label for the failure message.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic"),
    ("unreachable!(", 0, "unreachable"),
    ("todo!(", 0, "todo"),
    ("unimplemented!(", 0, "unimplemented"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "dot ok"),
    ("#[allow(dead_code)]", 0, "allow dead_code"),
    ("web_sys", 0, "browser binding (web_sys)"),
    ("wasm_bindgen", 0, "browser binding (wasm_bindgen)"),
];

/// Collect production `.rs` files from `dice/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("animator.rs")), "run from the dice crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max, label) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
