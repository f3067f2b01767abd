use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SKETCHKIT_GIT_HASH={hash}");

    if let Some(git_dir) = resolve_git_dir() {
        rerun_if_exists(&git_dir.join("HEAD"));
        rerun_if_exists(&git_dir.join("refs"));
        rerun_if_exists(&git_dir.join("packed-refs"));
    }
}

/// Locates the git directory, following a `gitdir:` pointer file (worktrees, submodules).
fn resolve_git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }
    if !dot_git.is_file() {
        return None;
    }

    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(contents.strip_prefix("gitdir:")?.trim());
    if target.is_relative() {
        let parent = dot_git.parent().unwrap_or_else(|| Path::new(""));
        return Some(parent.join(target));
    }
    Some(target)
}

fn rerun_if_exists(path: &Path) {
    if let Some(display) = path.to_str().filter(|_| path.exists()) {
        println!("cargo:rerun-if-changed={display}");
    }
}
