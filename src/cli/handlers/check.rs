//! Check command handler.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::cli::output::{CheckIssue, OutputFormat};
use crate::infra::{read_outline, scan_outline_directory};
use crate::wiki::WikiParser;

/// Result of checking a set of paths.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub checked: usize,
    pub issues: Vec<CheckIssue>,
}

pub fn handle_check(args: &CheckArgs, parser: &WikiParser<'_>, extensions: &[String]) -> Result<()> {
    let summary = check_paths(&args.paths, parser, extensions);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary.issues)?),
        OutputFormat::Human => {
            for issue in &summary.issues {
                println!("{}", issue);
            }
            if summary.issues.is_empty() {
                println!("All {} outline(s) OK.", summary.checked);
            }
        }
    }

    if !summary.issues.is_empty() {
        bail!(
            "{} of {} outline(s) failed to parse",
            summary.issues.len(),
            summary.checked
        );
    }
    Ok(())
}

/// Parses every file named by `paths`, descending into directories.
///
/// Files inside a directory are only picked up if their extension is one of
/// `extensions`; files named directly are always checked.
pub fn check_paths(paths: &[PathBuf], parser: &WikiParser<'_>, extensions: &[String]) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for path in paths {
        if path.is_dir() {
            match scan_outline_directory(path, extensions) {
                Ok(found) => {
                    for relative in found {
                        check_file(&path.join(relative), parser, &mut summary);
                    }
                }
                Err(e) => summary.issues.push(CheckIssue::from_error(&e)),
            }
        } else {
            check_file(path, parser, &mut summary);
        }
    }

    summary
}

fn check_file(path: &Path, parser: &WikiParser<'_>, summary: &mut CheckSummary) {
    summary.checked += 1;
    match read_outline(path, parser) {
        Ok(root) => debug!(path = %path.display(), nodes = root.count_descendants(), "outline ok"),
        Err(e) => summary.issues.push(CheckIssue::from_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertySchema;
    use crate::infra::DEFAULT_EXTENSIONS;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    fn check(paths: &[PathBuf]) -> CheckSummary {
        check_paths(paths, &WikiParser::new(PropertySchema::standard()), &extensions())
    }

    #[test]
    fn valid_files_produce_no_issues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.wiki"), "* a\n").unwrap();
        fs::write(dir.path().join("b.smsn"), "* b\n").unwrap();

        let summary = check(&[dir.path().to_path_buf()]);

        assert_eq!(summary.checked, 2);
        assert!(summary.issues.is_empty());
    }

    #[test]
    fn invalid_file_reports_line() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.wiki");
        fs::write(&bad, "* a\n* b [...]\n").unwrap();

        let summary = check(&[bad.clone()]);

        assert_eq!(summary.issues.len(), 1);
        assert_eq!(summary.issues[0].path, bad.display().to_string());
        assert_eq!(summary.issues[0].line, Some(2));
        assert_eq!(
            summary.issues[0].message,
            "line ends with the reserved truncation sequence \" [...]\""
        );
    }

    #[test]
    fn directory_scan_skips_other_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "not an outline").unwrap();

        let summary = check(&[dir.path().to_path_buf()]);

        assert_eq!(summary.checked, 0);
        assert!(summary.issues.is_empty());
    }

    #[test]
    fn explicit_file_is_checked_regardless_of_extension() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "not an outline").unwrap();

        let summary = check(&[file]);

        assert_eq!(summary.checked, 1);
        assert_eq!(summary.issues[0].message, "bullet is too long");
    }

    #[test]
    fn missing_file_is_an_issue() {
        let dir = TempDir::new().unwrap();

        let summary = check(&[dir.path().join("missing.wiki")]);

        assert_eq!(summary.issues.len(), 1);
        assert_eq!(summary.issues[0].line, None);
        assert!(summary.issues[0].message.contains("not found"));
    }
}
