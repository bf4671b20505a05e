#![allow(dead_code)]

use assert_cmd::Command;
pub use larder_test::TestEnvironment;

/// `larder` pointed at an isolated home, with logging silenced
pub fn larder_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("larder").unwrap();
    cmd.env_remove("LARDER_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("LARDER_LOG")
        .env("NO_COLOR", "1");
    for (key, value) in env.envs() {
        cmd.env(key, value);
    }
    cmd
}

/// Run a command with `--format json` and parse its stdout
pub fn run_json(env: &TestEnvironment, args: &[&str]) -> serde_json::Value {
    let output = larder_cmd(env)
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "larder {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
