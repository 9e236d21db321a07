use crate::common::command::{load_object, repository_dir, run_twig_command};
use crate::common::file::count_objects;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn write_blob_object_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    repository_dir.child(&file_name).write_str(&file_content)?;

    let output = run_twig_command(repository_dir.path(), &["hash-object", "-w", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$")?);
    let oid = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(load_object(repository_dir.path(), oid.trim())?, file_content);

    Ok(())
}

#[rstest]
fn hash_object_matches_git_blob_ids(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("hello.txt").write_str("hello\n")?;

    run_twig_command(repository_dir.path(), &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout("ce013625030ba8dba906f756967f9e9ca394464a\n");

    Ok(())
}

#[rstest]
fn hash_object_without_write_stores_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir.child("a.txt").write_str("content")?;

    run_twig_command(repository_dir.path(), &["hash-object", "a.txt"])
        .assert()
        .success();

    assert_eq!(count_objects(repository_dir.path()), 0);

    Ok(())
}
