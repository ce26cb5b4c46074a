use std::process::Command;

fn main() {
    // Bake the short commit hash into the version banner. Builds outside a
    // git checkout (release tarballs, vendored trees) get "unknown".
    let commit = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| String::from("unknown"));

    println!("cargo:rustc-env=MINIT_GIT_COMMIT={commit}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
