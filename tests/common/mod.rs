use assert_cmd::Command;
use std::path::Path;

pub fn shelter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("catshelter").unwrap();
    cmd.env_remove("CATSHELTER_ROOT");
    cmd.env_remove("CATSHELTER_LOG");
    cmd
}

/// Initialize a shelter in `dir`
#[allow(dead_code)]
pub fn init_shelter(dir: &Path) {
    shelter_cmd().arg("init").arg(dir).assert().success();
}

/// Run `add` in `dir` with the required fields plus `extra`, returning the new id
#[allow(dead_code)]
pub fn add_cat(dir: &Path, name: &str, breed: &str, extra: &[&str]) -> String {
    let output = shelter_cmd()
        .current_dir(dir)
        .args([
            "add",
            "--name",
            name,
            "--breed",
            breed,
            "--color",
            "Gray",
            "--image-url",
            "https://example.com/cat.jpg",
        ])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // "Added <name> (<id>)"
    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.rfind('(').unwrap() + 1;
    let end = stdout.rfind(')').unwrap();
    stdout[start..end].to_string()
}
