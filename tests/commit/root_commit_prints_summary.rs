use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, get_head_commit_sha, get_tree_entries, get_tree_id, load_object,
    repository_dir, run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn root_commit_prints_summary(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hi".to_string(),
    ));
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let output = twig_commit(repository_dir.path(), "first\n\nwith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main \(root-commit\) [0-9a-f]{7}\] first\n$",
        )?);

    let head = get_head_commit_sha(repository_dir.path())?;
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(stdout.contains(&head[..7]));

    let commit = load_object(repository_dir.path(), &head)?;
    assert!(commit.contains(&format!("author {AUTHOR_NAME} <{AUTHOR_EMAIL}>")));
    assert!(commit.contains("date 2023-01-01T12:00:00+00:00"));
    assert!(!commit.contains("parent "));

    let tree = get_tree_entries(
        repository_dir.path(),
        &get_tree_id(repository_dir.path(), &head)?,
    )?;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name, "a.txt");
    assert_eq!(tree[0].kind, "blob");
    assert_eq!(tree[0].mode, "100644");
    assert_eq!(
        load_object(repository_dir.path(), &tree[0].oid)?,
        "hi".to_string()
    );

    Ok(())
}

#[rstest]
fn committing_an_empty_index_records_an_empty_tree(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    twig_commit(repository_dir.path(), "nothing yet")
        .assert()
        .success();

    let head = get_head_commit_sha(repository_dir.path())?;
    let tree = get_tree_entries(
        repository_dir.path(),
        &get_tree_id(repository_dir.path(), &head)?,
    )?;
    assert!(tree.is_empty());

    Ok(())
}

#[rstest]
fn commit_outside_a_repository_fails(repository_dir: TempDir) {
    twig_commit(repository_dir.path(), "orphan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a twig repository"));
}
