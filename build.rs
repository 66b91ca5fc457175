use std::process::Command;

/// Exposes the latest git tag as `GIT_TAG` so the footer can show the release name.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };

    if !output.status.success() {
        return;
    }

    if let Some(tag) = String::from_utf8(output.stdout)
        .ok()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
    {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
