//! Architecture tests for source hygiene across the workspace.
//!
//! Enforces:
//! - Source files stay small: >400 LOC logs a warning, >600 LOC fails.
//! - Library code propagates errors instead of calling `.unwrap()` / `.expect(`.
//! - Tests manage temp files through the `tempfile` crate, never the process-wide
//!   temp directory from `std::env` or hardcoded tmp paths.
//!
//! This crate holds the patterns it searches for, so its own files are skipped.
//!
//! Files are analyzed statically; nothing here runs crate code.

use std::fs;
use std::path::{Path, PathBuf};

const WARNING_THRESHOLD: usize = 400;
const FAILURE_THRESHOLD: usize = 600;

/// Files excluded from size checks, as (path_suffix, justification).
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let mut failures = Vec::new();

    for file_path in rust_files(&workspace_root.join("crates")) {
        let loc = count_loc(&fs::read_to_string(&file_path).unwrap_or_default());
        let relative = file_path
            .strip_prefix(&workspace_root)
            .unwrap_or(&file_path)
            .to_string_lossy()
            .to_string();
        let excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !excluded {
            failures.push(format!("  - {}: {} lines", relative, loc));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] {}: {} LOC exceeds {}", relative, loc, WARNING_THRESHOLD);
        }
    }

    assert!(
        failures.is_empty(),
        "\nFiles exceeding {} LOC must be split or added to EXCLUDED_FILES:\n{}\n",
        FAILURE_THRESHOLD,
        failures.join("\n")
    );
}

#[test]
fn library_code_does_not_unwrap() {
    let workspace_root = find_workspace_root();
    let mut violations = Vec::new();

    for file_path in rust_files(&workspace_root.join("crates")) {
        if is_test_file(&file_path) {
            continue;
        }
        let content = fs::read_to_string(&file_path).unwrap_or_default();
        for (index, line) in library_section(&content).lines().enumerate() {
            let code = line.split("//").next().unwrap_or_default();
            if code.contains(".unwrap()") || code.contains(".expect(") {
                violations.push(format!("  - {}:{}", file_path.display(), index + 1));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\nLibrary code must propagate errors instead of panicking:\n{}\n",
        violations.join("\n")
    );
}

#[test]
fn tests_use_tempfile_for_temp_paths() {
    let workspace_root = find_workspace_root();
    let violations = temp_path_violations(&workspace_root.join("crates"));
    assert!(violations.is_empty(), "\n{}\n", violations.join("\n"));
}

/// Test files under `dir` that build temp paths by hand.
fn temp_path_violations(dir: &Path) -> Vec<String> {
    let env_temp_dir = concat!("std::env::", "temp_dir()");
    let hardcoded_tmp = concat!("\"/", "tmp");
    let mut violations = Vec::new();

    for file_path in rust_files(dir) {
        let relative = file_path.strip_prefix(dir).unwrap_or(&file_path);
        if relative.starts_with("architecture-tests") {
            continue;
        }
        let content = fs::read_to_string(&file_path).unwrap_or_default();
        if !content.contains("#[test]") {
            continue;
        }
        if content.contains(env_temp_dir) {
            violations.push(format!(
                "  - {}: uses the std::env temp directory; prefer tempfile::tempdir()",
                file_path.display()
            ));
        }
        if content.contains(hardcoded_tmp) {
            violations.push(format!(
                "  - {}: hardcoded tmp path; prefer tempfile",
                file_path.display()
            ));
        }
    }
    violations
}

/// Count lines of code, excluding blank lines and comment-only lines.
fn count_loc(content: &str) -> usize {
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }
        if in_block_comment {
            if trimmed.ends_with("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        count += 1;
    }
    count
}

/// The part of a source file before its `#[cfg(test)]` module.
fn library_section(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(index) => &content[..index],
        None => content,
    }
}

fn is_test_file(path: &Path) -> bool {
    let text = path.to_string_lossy();
    text.contains("/tests/") || text.ends_with("_tests.rs") || text.contains("architecture-tests")
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Find the workspace root by looking for a Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|content| content.contains("[workspace]"))
        })
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

#[test]
fn test_count_loc_skips_comments_and_blanks() {
    let source = r#"//! Module documentation

/// Function documentation
fn test() {
    /* block
       comment */
    // implementation
    let x = 1; // trailing comment counts
}
"#;
    assert_eq!(count_loc(source), 3);
}

#[test]
fn test_library_section_stops_at_test_module() {
    let source = "fn a() {}\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
    assert_eq!(library_section(source), "fn a() {}\n");
}

#[test]
fn test_rust_files_finds_nested_sources() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/src")).unwrap();
    fs::write(dir.path().join("a/src/lib.rs"), "").unwrap();
    fs::write(dir.path().join("a/README.md"), "").unwrap();

    let files = rust_files(dir.path());
    assert_eq!(files, vec![dir.path().join("a/src/lib.rs")]);
}

#[test]
fn test_excluded_files_are_justified() {
    for (pattern, justification) in EXCLUDED_FILES {
        assert!(!pattern.is_empty(), "Excluded file pattern must not be empty");
        assert!(
            !justification.is_empty(),
            "Justification for '{}' must not be empty",
            pattern
        );
    }
}

#[test]
fn test_temp_path_violations_on_fixture_tree() {
    let dir = tempfile::tempdir().unwrap();
    for sub in ["bad/tests", "good/tests", "architecture-tests/tests"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    let bad_body = format!(
        "#[test]\nfn t() {{ let _ = {}; }}\n",
        concat!("std::env::", "temp_dir()")
    );
    fs::write(dir.path().join("bad/tests/a_tests.rs"), &bad_body).unwrap();
    fs::write(
        dir.path().join("good/tests/b_tests.rs"),
        "#[test]\nfn t() { let _ = tempfile::tempdir(); }\n",
    )
    .unwrap();
    fs::write(dir.path().join("architecture-tests/tests/c.rs"), &bad_body).unwrap();

    let violations = temp_path_violations(dir.path());
    assert_eq!(violations.len(), 1, "{violations:?}");
    assert!(violations[0].contains("a_tests.rs"));
}
