use crate::common::command::{
    get_head_commit_sha, get_parent_commit_id, get_tree_id, init_repository_dir,
    run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_chain_links_parents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;

    write_file(FileSpec::new(dir.join("file2.txt"), "second".to_string()));
    run_twig_command(dir, &["add", "file2.txt"])
        .assert()
        .success();
    twig_commit(dir, "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main [0-9a-f]{7}\] Second commit\n$",
        )?);

    let second = get_head_commit_sha(dir)?;
    assert!(second != first);
    assert_eq!(get_parent_commit_id(dir, &second)?, first);

    Ok(())
}

#[rstest]
fn recommitting_without_staging_reuses_the_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;

    twig_commit(dir, "Nothing changed").assert().success();

    let second = get_head_commit_sha(dir)?;
    assert!(second != first);
    assert_eq!(get_parent_commit_id(dir, &second)?, first);
    assert_eq!(get_tree_id(dir, &second)?, get_tree_id(dir, &first)?);

    Ok(())
}
