use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Exposes the short git hash as `CANVAS_DEMO_GIT_HASH` for `--version`.
fn main() {
    let hash = short_git_hash().unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=CANVAS_DEMO_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir() {
        for entry in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(entry);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

/// `.git` may be a directory or, in worktrees and submodules, a file holding
/// a `gitdir:` pointer.
fn git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(contents.strip_prefix("gitdir:")?.trim());
    Some(if target.is_relative() {
        PathBuf::from(".").join(target)
    } else {
        target
    })
}
