use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            let s = String::from_utf8_lossy(&o.stdout).trim().to_string();
            let s = s.strip_prefix('v').unwrap_or(&s).to_string();
            (!s.is_empty()).then_some(s)
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

    println!("cargo:rustc-env=TASKBOARD_VERSION={version}");
}
