// SPDX-License-Identifier: PMPL-1.0-or-later
//! File and directory scanning.
//!
//! Reads HTML files from disk and hands their contents to an [`Auditor`].
//! Each file produces its own report, with the file path as its source.

use crate::audit::Auditor;
use crate::error::Result;
use crate::model::{Report, WcagLevel};
use std::io::Read;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &[
    "node_modules", ".git", "target", "dist", "build", "vendor", "coverage",
];

/// Audit a single file
pub fn scan_file(path: &Path, auditor: &Auditor, level: WcagLevel) -> Result<Report> {
    let bytes = std::fs::read(path)?;
    let source = path.display().to_string();
    auditor.audit_bytes(&bytes, Some(&source), level)
}

/// Audit markup read from any reader (stdin for the CLI)
pub fn scan_reader<R: Read>(
    mut reader: R,
    source: Option<&str>,
    auditor: &Auditor,
    level: WcagLevel,
) -> Result<Report> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    auditor.audit_bytes(&bytes, source, level)
}

/// Audit every HTML file under a directory, in path order
pub fn scan_directory(dir: &Path, auditor: &Auditor, level: WcagLevel) -> Result<Vec<Report>> {
    let mut reports = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if !SCANNABLE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        match scan_file(path, auditor, level) {
            Ok(report) => reports.push(report),
            Err(e) => info!("Skipping {}: {}", path.display(), e),
        }
    }

    info!("Scanned {} files", reports.len());

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_nonexistent_dir() {
        let reports = scan_directory(
            Path::new("/nonexistent/path"),
            &Auditor::default(),
            WcagLevel::AAA,
        );
        assert!(reports.unwrap().is_empty());
    }

    #[test]
    fn test_scan_file_sets_source() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("index.html");
        fs::write(&path, r#"<img src="a.png">"#).unwrap();

        let report = scan_file(&path, &Auditor::default(), WcagLevel::A).unwrap();
        assert_eq!(report.source, Some(path.display().to_string()));
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn test_scan_file_missing() {
        let result = scan_file(
            Path::new("/nonexistent/page.html"),
            &Auditor::default(),
            WcagLevel::A,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_reader() {
        let input: &[u8] = b"<a href='/'></a>";
        let report = scan_reader(input, None, &Auditor::default(), WcagLevel::A).unwrap();
        assert!(report.source.is_none());
        assert_eq!(report.findings.len(), 2);
    }

    #[test]
    fn test_scan_directory_filters_and_skips() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path();
        fs::write(root.join("a.html"), "<img src=x>").unwrap();
        fs::write(root.join("b.HTM"), "<p>fine</p>").unwrap();
        fs::write(root.join("notes.txt"), "<img src=x>").unwrap();
        fs::write(root.join("binary.html"), [0xffu8, 0x00, 0xfe]).unwrap();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("node_modules").join("dep.html"), "<img src=x>").unwrap();
        fs::create_dir(root.join("pages")).unwrap();
        fs::write(root.join("pages").join("c.html"), "<a></a>").unwrap();

        let reports = scan_directory(root, &Auditor::default(), WcagLevel::A).unwrap();
        let names: Vec<_> = reports
            .iter()
            .filter_map(|r| r.source.as_deref())
            .filter_map(|s| Path::new(s).file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["a.html", "b.HTM", "c.html"]);
    }
}
