use crate::common::command::{repository_dir, run_twig_command};
use crate::common::file::{FileSpec, read_index, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restaging_a_file_replaces_its_entry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let file = repository_dir.path().join("a.txt");

    write_file(FileSpec::new(file.clone(), "first".to_string()));
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    let first_hash = read_index(repository_dir.path())[0]["hash"].clone();

    write_file(FileSpec::new(file, "second version".to_string()));
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let index = read_index(repository_dir.path());
    let entries = index.as_array().ok_or("index is not an array")?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["path"], "a.txt");
    assert_eq!(entries[0]["size"], 14);
    assert!(entries[0]["hash"] != first_hash);

    Ok(())
}

#[rstest]
fn replacing_a_directory_with_a_file_drops_its_entries(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let dir = repository_dir.path().join("a");
    write_file(FileSpec::new(dir.join("b.txt"), "nested".to_string()));
    run_twig_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    std::fs::remove_dir_all(&dir)?;
    write_file(FileSpec::new(dir, "now a file".to_string()));
    run_twig_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    let index = read_index(repository_dir.path());
    let paths = index
        .as_array()
        .ok_or("index is not an array")?
        .iter()
        .map(|entry| entry["path"].clone())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec![serde_json::json!("a")]);

    Ok(())
}
