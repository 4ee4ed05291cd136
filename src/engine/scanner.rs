use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Instruction files under `root` that match `include` and sit outside `ignore`.
pub fn scan(root: &Path, config: &Config) -> Vec<PathBuf> {
    let filter = ScanFilter::new(root, config);
    let mut files = Vec::new();
    filter.walk(root, &mut files);
    files.sort();
    files
}

/// Include/ignore globs resolved against one scan root. A pattern matches
/// either the bare file name or the path relative to the root.
struct ScanFilter<'a> {
    root: &'a Path,
    include: GlobSet,
    ignore: GlobSet,
}

impl<'a> ScanFilter<'a> {
    fn new(root: &'a Path, config: &Config) -> Self {
        Self {
            root,
            include: glob_set(&config.include),
            ignore: glob_set(&config.ignore),
        }
    }

    fn hits(&self, set: &GlobSet, path: &Path) -> bool {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| set.is_match(name));
        by_name || path.strip_prefix(self.root).is_ok_and(|rel| set.is_match(rel))
    }

    fn is_instruction_file(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("md") && self.hits(&self.include, path)
    }

    fn walk(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("cannot read directory {}: {e}", dir.display());
                return;
            }
        };

        for path in entries.flatten().map(|entry| entry.path()) {
            if self.hits(&self.ignore, &path) {
                continue;
            }
            if path.is_dir() {
                self.walk(&path, files);
            } else if self.is_instruction_file(&path) {
                files.push(path);
            }
        }
    }
}

/// Case-insensitive so `agents.md` and `Claude.md` are picked up too.
/// Malformed patterns are skipped.
fn glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for glob in patterns
        .iter()
        .filter_map(|p| GlobBuilder::new(p).case_insensitive(true).build().ok())
    {
        builder.add(glob);
    }
    builder.build().unwrap_or_default()
}
