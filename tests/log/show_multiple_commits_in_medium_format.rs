use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, get_head_commit_sha, get_parent_commit_id, init_repository_dir,
    run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_medium_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // Create second commit
    write_file(FileSpec::new(
        repository_dir.path().join("file2.txt"),
        "second file content".to_string(),
    ));
    run_twig_command(repository_dir.path(), &["add", "file2.txt"])
        .assert()
        .success();
    twig_commit(repository_dir.path(), "Second commit\n\nWith details")
        .assert()
        .success();

    let commit2 = get_head_commit_sha(repository_dir.path())?;
    let commit1 = get_parent_commit_id(repository_dir.path(), &commit2)?;

    let output = run_twig_command(repository_dir.path(), &["log"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = format!(
        "commit {commit2}\n\
         Author: {AUTHOR_NAME} <{AUTHOR_EMAIL}>\n\
         Date:   Sun Jan 1 12:00:00 2023 +0000\n\
         \n    Second commit\n    \n    With details\n\
         \n\
         commit {commit1}\n\
         Author: {AUTHOR_NAME} <{AUTHOR_EMAIL}>\n\
         Date:   Sun Jan 1 12:00:00 2023 +0000\n\
         \n    Initial commit\n"
    );
    assert_eq!(stdout, expected);

    Ok(())
}
