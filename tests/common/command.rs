use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init"]).assert().success();
    run_git_command(dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(dir.path(), &["config", "user.email", "fake_email@email.com"])
        .assert()
        .success();

    dir
}

#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
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

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_keepsake_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("keepsake").expect("Failed to find keepsake binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd
}

/// Get the current HEAD commit SHA
pub fn get_head_commit_sha(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to run git rev-parse");
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in commit sha")
        .trim()
        .to_string()
}

/// Get the current branch name
pub fn get_current_branch(dir: &Path) -> String {
    let output = run_git_command(dir, &["symbolic-ref", "--short", "HEAD"])
        .output()
        .expect("Failed to run git symbolic-ref");
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in branch name")
        .trim()
        .to_string()
}

/// List all local branch names
pub fn list_branches(dir: &Path) -> Vec<String> {
    let output = run_git_command(
        dir,
        &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
    )
    .output()
    .expect("Failed to run git for-each-ref");
    assert!(output.status.success());

    let mut branches = String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in branch listing")
        .lines()
        .map(str::to_string)
        .collect::<Vec<_>>();
    branches.sort();
    branches
}

/// List the paths recorded in a commit's tree
pub fn list_commit_files(dir: &Path, commit: &str) -> Vec<String> {
    let output = run_git_command(dir, &["ls-tree", "-r", "--name-only", commit])
        .output()
        .expect("Failed to run git ls-tree");
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in tree listing")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Read a file's content as recorded in a commit
pub fn show_committed_file(dir: &Path, commit: &str, path: &str) -> String {
    let output = run_git_command(dir, &["show", &format!("{commit}:{path}")])
        .output()
        .expect("Failed to run git show");
    assert!(output.status.success());

    String::from_utf8(output.stdout).expect("Invalid utf-8 in file content")
}

/// Get the parent commit ids recorded in a commit object
pub fn get_parent_commit_ids(dir: &Path, commit: &str) -> Vec<String> {
    let output = run_git_command(dir, &["cat-file", "commit", commit])
        .output()
        .expect("Failed to run git cat-file");
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in commit object")
        .lines()
        .filter_map(|line| line.strip_prefix("parent ").map(str::to_string))
        .collect()
}

/// List leftover isolated staging files inside the metadata directory
pub fn list_staging_leftovers(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir.join(".git"))
        .expect("Failed to read metadata directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("index.snapshot-"))
        .collect()
}
