use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::predicate;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("twig")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    dir.child(".git/HEAD").assert("ref: refs/heads/main\n");
    dir.child(".git/index").assert("[]");
    dir.child(".git/objects").assert(predicate::path::is_dir());
    dir.child(".git/refs/heads").assert(predicate::path::is_dir());
    dir.child(".git/refs/heads/main").assert(predicate::path::missing());

    Ok(())
}

#[test]
fn init_creates_a_missing_target_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let target = dir.child("nested/project");

    Command::cargo_bin("twig")?
        .arg("init")
        .arg(target.path())
        .assert()
        .success();

    target.child(".git/HEAD").assert(predicate::path::is_file());

    Ok(())
}
