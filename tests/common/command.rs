use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository holding one commit of `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    twig_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.env_remove("TWIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_twig_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("GIT_AUTHOR_DATE", AUTHOR_DATE), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

/// Print a stored object through `load-object`
pub fn load_object(dir: &Path, oid: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_twig_command(dir, &["load-object", oid]).output()?;
    if !output.status.success() {
        return Err(format!("load-object {oid} failed: {:?}", output).into());
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Get the parent commit id of a given commit from its rendered form
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let commit = load_object(dir, commit_id)?;

    commit
        .lines()
        .find_map(|line| line.strip_prefix("parent "))
        .map(str::to_string)
        .ok_or_else(|| "No parent found".into())
}

/// Get the tree id a commit points at
pub fn get_tree_id(dir: &Path, commit_id: &str) -> Result<String, Box<dyn std::error::Error>> {
    let commit = load_object(dir, commit_id)?;

    commit
        .lines()
        .find_map(|line| line.strip_prefix("tree "))
        .map(str::to_string)
        .ok_or_else(|| "No tree found".into())
}

/// One `mode type id<TAB>name` row of a rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub mode: String,
    pub kind: String,
    pub oid: String,
    pub name: String,
}

pub fn get_tree_entries(
    dir: &Path,
    tree_id: &str,
) -> Result<Vec<TreeRow>, Box<dyn std::error::Error>> {
    load_object(dir, tree_id)?
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<TreeRow, Box<dyn std::error::Error>> {
            let (meta, name) = line.split_once('\t').ok_or("missing tab")?;
            let parts = meta.split(' ').collect::<Vec<_>>();
            match parts.as_slice() {
                [mode, kind, oid] => Ok(TreeRow {
                    mode: mode.to_string(),
                    kind: kind.to_string(),
                    oid: oid.to_string(),
                    name: name.to_string(),
                }),
                _ => Err(format!("malformed tree line: {line}").into()),
            }
        })
        .collect()
}

/// Get the current HEAD commit id
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".git").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    // HEAD file contains either a commit id or a ref like "ref: refs/heads/main"
    if let Some(ref_path) = head_content.strip_prefix("ref: ") {
        let ref_file = dir.join(".git").join(ref_path.trim());
        let commit_sha = std::fs::read_to_string(ref_file)?;
        Ok(commit_sha.trim().to_string())
    } else {
        Ok(head_content.trim().to_string())
    }
}
