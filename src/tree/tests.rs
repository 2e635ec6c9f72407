use super::*;
use crate::config::LoaderConfig;
use crate::test_support::Fixture;

fn paths_of_files(tree: &Tree, dir: DirId) -> Vec<String> {
    tree.directory(dir)
        .files()
        .iter()
        .map(|id| tree.file(*id).filepath().to_string())
        .collect()
}

#[test]
fn test_load_attaches_files_to_parent() {
    let fixture = Fixture::new();
    fixture.write("tome.yaml", "");
    fixture.write("training/dsu-reports.yaml", "");
    fixture.write("training/archived/old-dsu-reports.yaml", "");
    fixture.write("evaluations/eval-self.yaml", "");

    let tree = load_tree(fixture.root()).unwrap();
    let root = tree.root();

    assert_eq!(tree.directory(root).path(), fixture.root().to_string_lossy());
    assert_eq!(tree.directory_count(), 4);
    assert_eq!(tree.file_count(), 4);
    assert_eq!(paths_of_files(&tree, root).len(), 1);

    // Walk is in file-name order: evaluations before training
    let subdirs = tree.directory(root).subdirectories();
    assert_eq!(subdirs.len(), 2);
    assert!(tree.directory(subdirs[0]).path().ends_with("evaluations"));

    let training = subdirs[1];
    assert!(tree.directory(training).path().ends_with("training"));
    assert_eq!(tree.directory(training).subdirectories().len(), 1);
    let files = paths_of_files(&tree, training);
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("training/dsu-reports.yaml"));

    for id in tree.directory(training).files() {
        assert_eq!(tree.file(*id).directory(), training);
    }
}

#[test]
fn test_blacklisted_directories_are_pruned_with_subtree() {
    let fixture = Fixture::new();
    fixture.write(".git/HEAD", "ref: refs/heads/main");
    fixture.write(".git/objects/ab/cdef", "blob");
    fixture.write("training/dsu.yaml", "");

    let tree = load_tree(fixture.root()).unwrap();

    assert_eq!(tree.directory_count(), 2);
    assert_eq!(tree.file_count(), 1);
    for id in tree.walk_directories() {
        assert!(!tree.directory(id).path().contains(".git"));
    }
}

#[test]
fn test_custom_blacklist() {
    let fixture = Fixture::new();
    fixture.write("node_modules/pkg/index.js", "");
    fixture.write("notes/readme.txt", "");

    let config = LoaderConfig {
        blacklist: vec!["node_modules".to_string()],
        ..LoaderConfig::default()
    };
    let tree = load_tree_with_config(fixture.root(), &config).unwrap();

    assert_eq!(tree.directory_count(), 2);
    assert_eq!(tree.file_count(), 1);
}

#[test]
fn test_every_extension_is_kept_by_default() {
    let fixture = Fixture::new();
    fixture.write("a.yaml", "");
    fixture.write("b.md", "");
    fixture.write("c.txt", "");

    let tree = load_tree(fixture.root()).unwrap();
    assert_eq!(tree.file_count(), 3);
}

#[test]
fn test_missing_root_is_a_traversal_error() {
    let fixture = Fixture::new();
    let missing = fixture.root().join("does-not-exist");

    let err = load_tree(&missing).unwrap_err();
    let TreeError::Traversal { path, .. } = err;
    assert!(path.ends_with("does-not-exist"));
}

#[test]
fn test_walk_directories_is_depth_first() {
    let mut tree = Tree::new("/repo");
    let training = tree.add_directory(tree.root(), "/repo/training");
    let archived = tree.add_directory(training, "/repo/training/archived");
    let evaluations = tree.add_directory(tree.root(), "/repo/evaluations");

    assert_eq!(
        tree.walk_directories(),
        vec![tree.root(), training, archived, evaluations]
    );
}

#[test]
fn test_status_report() {
    let mut tree = Tree::new("/repo");
    let training = tree.add_directory(tree.root(), "/repo/training");
    tree.add_file(tree.root(), "/repo/tome.yaml");
    let dsu = tree.add_file(training, "/repo/training/dsu.yaml");

    tree.file_mut(dsu).error = Some(ValidationError::NoDimension);
    tree.directory_mut(training).erroneous_files.push(dsu);
    tree.directory_mut(training).error = Some(ValidationError::NoDimension);

    let report = tree.status_report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            " ✅ Path [/repo] has a total of 1 directories and 1 files.",
            " ❌ Path [/repo/training] has a total of 0 directories and 1 files. Validation failed: no dimension specified for evaluation",
            "    ❌ File [/repo/training/dsu.yaml]: no dimension specified for evaluation",
        ]
    );

    tree.clear_errors();
    assert!(!tree.status_report().contains('❌'));
}
