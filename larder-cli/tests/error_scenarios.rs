mod common;

use anyhow::Result;
use predicates::prelude::*;

use common::*;

#[test]
fn test_unknown_tag_id_is_a_taxonomy_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .args(["tree", "cuisine.atlantean"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("tag not found: cuisine.atlantean"));
    Ok(())
}

#[test]
fn test_malformed_tag_id() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .args(["label", "Not A Tag"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Error"));
    Ok(())
}

#[test]
fn test_validate_invalid_tags_fail() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .args(["validate", "cuisine.italian", "difficulty.beginner", "Serious Eats"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Serious Eats is not a registered tag id"))
        .stderr(predicate::str::contains("1 invalid tag(s)"));
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .arg("report")
        .arg("--input")
        .arg(env.root().join("missing.json"))
        .assert()
        .failure()
        .code(3);
    Ok(())
}

#[test]
fn test_malformed_record_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.write_file("records.json", "{ not json")?;
    larder_cmd(&env)
        .arg("report")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .code(4);
    Ok(())
}

#[test]
fn test_broken_config_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_file("home/config.toml", "[search\ndefault_limit = ")?;
    larder_cmd(&env)
        .args(["normalize", "Italian"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn test_explicit_missing_config_uses_defaults() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .arg("--config")
        .arg(env.root().join("nowhere.toml"))
        .args(["normalize", "--ids-only", "Italian"])
        .assert()
        .success()
        .stdout("cuisine.italian\n");
    Ok(())
}

#[test]
fn test_config_init_refuses_to_overwrite() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_file("home/config.toml", "")?;
    larder_cmd(&env)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    larder_cmd(&env)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_unknown_strategy_is_a_usage_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    larder_cmd(&env)
        .args(["migrate", "-i", "a.json", "-o", "b.json", "--strategy", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
    Ok(())
}
