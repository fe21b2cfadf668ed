//! Bounded, ignore-aware directory traversal.

use log::debug;
use std::fs;
use std::path::Path;

use crate::catalog::IGNORED_DIRS;

/// Scan the tree rooted at `root` and return relative file paths.
///
/// Depth is the number of path components between `root` and a
/// directory; directories at `depth >= max_depth` are not entered, so
/// neither their files nor their subdirectories are listed. Directory
/// names in [`IGNORED_DIRS`] are pruned at any depth. Unreadable
/// directories are skipped; a readable root with no files yields an
/// empty list. The result is sorted so repeated scans of an unmodified
/// tree are bit-identical.
pub fn scan(root: &Path, max_depth: usize) -> Vec<String> {
    let mut files = Vec::new();
    walk(root, root, 0, max_depth, &mut files);
    files.sort();
    debug!("scanned {} files under {}", files.len(), root.display());
    files
}

fn walk(
    root: &Path,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    files: &mut Vec<String>,
) {
    if depth >= max_depth {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                "skipping unreadable directory {}: {}",
                dir.display(),
                err
            );
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if is_ignored(&entry.file_name()) {
                continue;
            }
            walk(root, &path, depth + 1, max_depth, files);
        } else if file_type.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_string_lossy().into_owned());
            }
        }
    }
}

fn is_ignored(name: &std::ffi::OsStr) -> bool {
    IGNORED_DIRS
        .iter()
        .any(|ignored| name.to_string_lossy() == *ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lists_files_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        fs::write(path.join("pom.xml"), "<project></project>").unwrap();
        fs::create_dir_all(path.join("src/main")).unwrap();
        fs::write(path.join("src/main/App.java"), "class App {}")
            .unwrap();

        let files = scan(path, 3);
        assert_eq!(files, vec!["pom.xml", "src/main/App.java"]);
    }

    #[test]
    fn test_max_depth_bounds_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        fs::write(path.join("top.txt"), "").unwrap();
        fs::create_dir_all(path.join("a/b/c")).unwrap();
        fs::write(path.join("a/one.txt"), "").unwrap();
        fs::write(path.join("a/b/two.txt"), "").unwrap();
        fs::write(path.join("a/b/c/three.txt"), "").unwrap();

        // Directories at depth >= 1 are not entered.
        assert_eq!(scan(path, 1), vec!["top.txt"]);
        // Depth 2 reaches files directly inside "a" but not "a/b".
        assert_eq!(scan(path, 2), vec!["a/one.txt", "top.txt"]);
        assert_eq!(
            scan(path, 3),
            vec!["a/b/two.txt", "a/one.txt", "top.txt"]
        );
    }

    #[test]
    fn test_prunes_ignored_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        fs::create_dir_all(path.join("node_modules/react")).unwrap();
        fs::write(path.join("node_modules/react/index.js"), "")
            .unwrap();
        fs::create_dir_all(path.join(".git")).unwrap();
        fs::write(path.join(".git/HEAD"), "ref: main").unwrap();
        fs::write(path.join("package.json"), "{}").unwrap();

        assert_eq!(scan(path, 5), vec!["package.json"]);
    }

    #[test]
    fn test_empty_root_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        assert!(scan(temp_dir.path(), 3).is_empty());
    }

    #[test]
    fn test_missing_root_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        assert!(scan(&missing, 3).is_empty());
    }

    #[test]
    fn test_scan_is_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        for name in ["b.txt", "a.txt", "c.txt"] {
            fs::write(path.join(name), "").unwrap();
        }

        assert_eq!(scan(path, 3), scan(path, 3));
    }
}
