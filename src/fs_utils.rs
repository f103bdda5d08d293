use crate::error::{PatchError, Result};
use globset::GlobSet;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for discovering course data files under a project root
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// Root-relative glob patterns a data file must match
    pub include: GlobSet,
    /// Root-relative glob patterns to skip
    pub exclude: Option<GlobSet>,
    /// Whether to honor .gitignore files while walking
    pub use_gitignore: bool,
}

/// Reads the contents of a data file at the given path
///
/// # Errors
///
/// - `PatchError::FileNotFound` if the path doesn't exist or isn't a file.
/// - `PatchError::Io` if there's an error reading the file.
pub fn read_file_contents(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PatchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(PatchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(std::convert::Into::into)
}

/// Walks the project root and collects every file whose root-relative path
/// matches the include set and none of the excludes. Hidden entries are
/// skipped; .gitignore rules apply unless disabled. Results come back sorted
/// so runs are deterministic.
///
/// # Errors
///
/// - `PatchError::Walk` if a directory entry cannot be read.
pub fn discover_data_files(opts: &DiscoverOptions) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(&opts.root);
    builder
        .require_git(false)
        .git_ignore(opts.use_gitignore)
        .git_global(opts.use_gitignore)
        .git_exclude(opts.use_gitignore);

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(&opts.root).unwrap_or(path);
        if !opts.include.is_match(relative) {
            continue;
        }
        if let Some(exclude) = &opts.exclude
            && exclude.is_match(relative)
        {
            continue;
        }

        found.push(path.to_path_buf());
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
#[allow(unused)]
const _: () = {};

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{Glob, GlobSetBuilder};
    use std::fs;
    use tempfile::TempDir;

    fn glob_set(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern).unwrap());
        }
        builder.build().unwrap()
    }

    fn default_opts(root: &Path) -> DiscoverOptions {
        DiscoverOptions {
            root: root.to_path_buf(),
            include: glob_set(&["**/courses.ts"]),
            exclude: None,
            use_gitignore: true,
        }
    }

    #[test]
    fn test_read_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("courses.ts");

        // Test reading existing file
        fs::write(&file_path, "export const courses = [];").unwrap();
        let result = read_file_contents(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "export const courses = [];");

        // Test reading non-existent file
        let non_existent = temp_dir.path().join("nonexistent.ts");
        let result = read_file_contents(&non_existent);
        assert!(matches!(result, Err(PatchError::FileNotFound { .. })));

        // Test reading directory as file
        let dir_path = temp_dir.path().join("dir");
        fs::create_dir(&dir_path).unwrap();
        let result = read_file_contents(&dir_path);
        assert!(matches!(result, Err(PatchError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_file_contents_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.ts");

        fs::write(&file_path, "").unwrap();
        let result = read_file_contents(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_read_file_contents_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.ts");

        let content = "title: 'Chứng chỉ Quốc tế ICDL',";
        fs::write(&file_path, content).unwrap();
        let result = read_file_contents(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), content);
    }

    #[test]
    fn test_discover_matches_nested_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("data")).unwrap();
        fs::create_dir_all(base.join("app/ky-nang-mem/constants")).unwrap();
        fs::write(base.join("data/courses.ts"), "a").unwrap();
        fs::write(base.join("app/ky-nang-mem/constants/courses.ts"), "b").unwrap();
        fs::write(base.join("data/timeline.ts"), "c").unwrap();

        let found = discover_data_files(&default_opts(base)).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("app/ky-nang-mem/constants/courses.ts"));
        assert!(found[1].ends_with("data/courses.ts"));
    }

    #[test]
    fn test_discover_respects_excludes() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("data")).unwrap();
        fs::create_dir_all(base.join("backup")).unwrap();
        fs::write(base.join("data/courses.ts"), "a").unwrap();
        fs::write(base.join("backup/courses.ts"), "b").unwrap();

        let mut opts = default_opts(base);
        opts.exclude = Some(glob_set(&["backup/**"]));
        let found = discover_data_files(&opts).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("data/courses.ts"));
    }

    #[test]
    fn test_discover_honors_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("data")).unwrap();
        fs::create_dir_all(base.join("node_modules/pkg")).unwrap();
        fs::write(base.join(".gitignore"), "node_modules/\n").unwrap();
        fs::write(base.join("data/courses.ts"), "a").unwrap();
        fs::write(base.join("node_modules/pkg/courses.ts"), "b").unwrap();

        let found = discover_data_files(&default_opts(base)).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("data/courses.ts"));

        // Disabling gitignore compliance surfaces the ignored copy too.
        let mut opts = default_opts(base);
        opts.use_gitignore = false;
        let found = discover_data_files(&opts).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_discover_skips_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join(".cache")).unwrap();
        fs::write(base.join(".cache/courses.ts"), "a").unwrap();
        fs::write(base.join("courses.ts"), "b").unwrap();

        let found = discover_data_files(&default_opts(base)).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("courses.ts"));
        assert!(!found[0].to_string_lossy().contains(".cache"));
    }
}
