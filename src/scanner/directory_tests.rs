use std::fs;

use tempfile::TempDir;

use super::*;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct PythonOnlyFilter;

impl FileFilter for PythonOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "py")
    }
}

#[test]
fn finds_files_recursively_in_sorted_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("pkg")).unwrap();
    fs::write(temp_dir.path().join("pkg/b.py"), "").unwrap();
    fs::write(temp_dir.path().join("a.py"), "").unwrap();

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(
        files,
        vec![temp_dir.path().join("a.py"), temp_dir.path().join("pkg/b.py")]
    );
}

#[test]
fn respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.py"), "").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let files = DirectoryScanner::new(PythonOnlyFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.py"));
}

#[test]
fn skips_vcs_and_state_directories() {
    let temp_dir = TempDir::new().unwrap();
    for dir in [".git", ".metric-delta"] {
        fs::create_dir(temp_dir.path().join(dir)).unwrap();
        fs::write(temp_dir.path().join(dir).join("hook.py"), "").unwrap();
    }
    fs::write(temp_dir.path().join("main.py"), "").unwrap();

    for use_gitignore in [false, true] {
        let files = DirectoryScanner::with_gitignore(AcceptAllFilter, use_gitignore)
            .scan(temp_dir.path())
            .unwrap();
        assert_eq!(files, vec![temp_dir.path().join("main.py")]);
    }
}

#[test]
fn gitignore_rules_are_honored_when_enabled() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "build/\n").unwrap();
    fs::create_dir(temp_dir.path().join("build")).unwrap();
    fs::write(temp_dir.path().join("build/out.py"), "").unwrap();
    fs::write(temp_dir.path().join("main.py"), "").unwrap();

    let ignored = DirectoryScanner::with_gitignore(PythonOnlyFilter, true)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(ignored, vec![temp_dir.path().join("main.py")]);

    let all = DirectoryScanner::with_gitignore(PythonOnlyFilter, false)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn empty_directory_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn filter_sees_paths_relative_to_scan_root() {
    struct RootedFilter;

    impl FileFilter for RootedFilter {
        fn should_include(&self, relative: &Path) -> bool {
            relative.starts_with("pkg")
        }
    }

    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("pkg")).unwrap();
    fs::write(temp_dir.path().join("pkg/b.py"), "").unwrap();
    fs::write(temp_dir.path().join("a.py"), "").unwrap();

    let files = DirectoryScanner::new(RootedFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files, vec![temp_dir.path().join("pkg/b.py")]);
}
