use crate::common::command::{init_repository_dir, run_twig_command, twig_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn logged_messages(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.starts_with("    "))
        .map(|line| line.trim().to_string())
        .collect()
}

#[rstest]
#[case("1", vec!["Third"])]
#[case("2", vec!["Third", "Second"])]
#[case("10", vec!["Third", "Second", "Initial commit"])]
fn show_log_with_limit(
    init_repository_dir: TempDir,
    #[case] limit: &str,
    #[case] expected: Vec<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    twig_commit(dir, "Second").assert().success();
    twig_commit(dir, "Third").assert().success();

    let output = run_twig_command(dir, &["log", "-n", limit])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(logged_messages(&stdout), expected);

    Ok(())
}
