use super::*;
use crate::tree::Tree;

fn mock_tree() -> Tree {
    let mut tree = Tree::new("/mock/repo");
    let root = tree.root();
    let training = tree.add_directory(root, "/mock/repo/training");
    let evaluations = tree.add_directory(root, "/mock/repo/evaluations");
    let archived = tree.add_directory(training, "/mock/repo/training/archived");

    tree.add_file(root, "/mock/repo/README.md");
    tree.add_file(root, "/mock/repo/tome.yaml");
    tree.add_file(training, "/mock/repo/training/dsu-reports.yaml");
    tree.add_file(training, "/mock/repo/training/dsu-reports-q2-2024.yaml");
    tree.add_file(evaluations, "/mock/repo/evaluations/eval-self.yaml");
    tree.add_file(archived, "/mock/repo/training/archived/old-dsu-reports.yaml");
    tree
}

fn dir_paths(plan: &ValidationPlan) -> Vec<&str> {
    plan.directories()
        .iter()
        .map(|id| plan.tree().directory(*id).path())
        .collect()
}

#[test]
fn test_directory_weight_policy() {
    assert_eq!(directory_weight("/repo/meta"), 110);
    assert_eq!(directory_weight("/repo/evaluations"), 100);
    assert_eq!(directory_weight("/repo/flash-cards"), 90);
    assert_eq!(directory_weight("/repo/mappings"), 90);
    assert_eq!(directory_weight("/repo/mental-models"), 90);
    assert_eq!(directory_weight("/repo/training"), 10);
    assert_eq!(directory_weight("/repo/notes"), 100);
    // First match wins
    assert_eq!(directory_weight("/repo/meta/training"), 110);
    assert_eq!(directory_weight("/repo/training/mappings"), 90);
}

#[test]
fn test_plan_collects_everything_recursively() {
    let plan = build_plan(mock_tree());

    assert_eq!(plan.directories().len(), 4);
    assert_eq!(plan.files().len(), 6);
    assert_eq!(plan.directories().len(), plan.directory_weights().len());
    assert_eq!(plan.files().len(), plan.file_weights().len());

    let files: Vec<&str> = plan.file_paths().collect();
    assert!(files.contains(&"/mock/repo/README.md"));
    assert!(files.contains(&"/mock/repo/training/archived/old-dsu-reports.yaml"));

    let dsu_files = files.iter().filter(|path| path.contains("dsu")).count();
    assert_eq!(dsu_files, 3);
}

#[test]
fn test_plan_orders_by_descending_weight() {
    let plan = build_plan(mock_tree());

    assert_eq!(
        dir_paths(&plan),
        vec![
            "/mock/repo",
            "/mock/repo/evaluations",
            "/mock/repo/training",
            "/mock/repo/training/archived",
        ]
    );
    assert_eq!(plan.directory_weights(), &[100, 100, 10, 10]);

    assert!(plan.file_weights().windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(plan.file_weights(), &[10000, 10000, 10000, 1000, 1000, 1000]);

    // Weights stay paired with their files
    for (id, weight) in plan.files().iter().zip(plan.file_weights()) {
        let parent = plan.tree().file(*id).directory();
        let expected = FILE_BASE_WEIGHT * directory_weight(plan.tree().directory(parent).path());
        assert_eq!(*weight, expected);
    }

    // Equal weights keep walk order
    let files: Vec<&str> = plan.file_paths().collect();
    assert_eq!(files[0], "/mock/repo/README.md");
    assert_eq!(files[1], "/mock/repo/tome.yaml");
    assert_eq!(files[2], "/mock/repo/evaluations/eval-self.yaml");
    assert_eq!(files[3], "/mock/repo/training/dsu-reports.yaml");
}

#[test]
fn test_meta_directory_goes_first() {
    let mut tree = Tree::new("/repo");
    let root = tree.root();
    tree.add_directory(root, "/repo/training");
    tree.add_directory(root, "/repo/meta");

    let plan = build_plan(tree);
    assert_eq!(dir_paths(&plan)[0], "/repo/meta");
    assert_eq!(plan.directory_weights()[0], 110);
}

#[test]
fn test_duplicate_paths_are_kept_once() {
    let mut tree = Tree::new("/repo");
    let root = tree.root();
    let first = tree.add_directory(root, "/repo/training");
    let second = tree.add_directory(root, "/repo/training");
    let kept = tree.add_file(first, "/repo/training/dsu.yaml");
    tree.add_file(first, "/repo/training/dsu.yaml");
    tree.add_file(second, "/repo/training/dsu.yaml");

    let plan = build_plan(tree);

    assert_eq!(plan.directories().len(), 2);
    assert_eq!(plan.files().len(), 1);
    assert_eq!(plan.files()[0], kept);
    assert!(plan.directories().contains(&first));
    assert!(!plan.directories().contains(&second));
}

#[test]
fn test_context_starts_empty() {
    let plan = build_plan(mock_tree());
    assert!(plan.context().registered_training().is_empty());
    assert!(plan.context().valid_training().is_empty());
    assert!(!plan.is_registered("A1"));
    assert!(!plan.is_valid("A1"));
}

#[test]
fn test_context_transitions() {
    let mut ctx = ValidationContext::default();
    ctx.register_training("A1");
    assert!(ctx.is_registered("A1"));
    assert!(!ctx.is_valid("A1"));

    ctx.mark_valid("A1");
    ctx.register_training("A1");
    assert!(ctx.is_valid("A1"));
    assert_eq!(ctx.registered_training().len(), 1);

    ctx.register_dimension("focus");
    ctx.register_dimension("");
    assert!(ctx.is_known_dimension("focus"));
    assert!(!ctx.is_known_dimension(""));

    ctx.reset();
    assert!(!ctx.is_registered("A1"));
    assert!(!ctx.is_known_dimension("focus"));
}
