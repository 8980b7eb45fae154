use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn prodcat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prodcat").unwrap();
    cmd.arg("--dir")
        .arg(dir)
        .env("NO_COLOR", "1")
        .env_remove("PRODCAT_HOME");
    cmd
}

fn stored_ids(dir: &Path) -> Vec<u64> {
    let content = fs::read_to_string(dir.join("products.json")).unwrap();
    let products: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    products
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn seed_and_list() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (1): Leche"));

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ASDF12"))
        .stdout(predicate::str::contains("BVCD15"))
        .stdout(predicate::str::contains("BVSB16"));

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3]);
}

#[test]
fn update_then_remove() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();

    prodcat(temp.path())
        .args(["update", "2", "--price", "1600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (2): Cafe"));

    prodcat(temp.path())
        .args(["get", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1600.00"))
        .stdout(predicate::str::contains("Café tostado"));

    prodcat(temp.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product removed (1): Leche"));

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ASDF12").not())
        .stdout(predicate::str::contains("BVCD15"));

    assert_eq!(stored_ids(temp.path()), vec![2, 3]);
}

#[test]
fn add_with_missing_fields_writes_nothing() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["add", "--title", "Pan", "--code", "PAN1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing required fields: description, price, thumbnail, stock",
        ));

    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn add_with_duplicate_code_writes_nothing() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();
    let before = fs::read_to_string(temp.path().join("products.json")).unwrap();

    prodcat(temp.path())
        .args([
            "add",
            "--json",
            r#"{"title":"Otra","description":"x","price":1,"thumbnail":"x.jpg","code":"ASDF12","stock":1}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A product with code ASDF12 already exists"));

    let after = fs::read_to_string(temp.path().join("products.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn ids_continue_across_invocations() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();

    prodcat(temp.path())
        .args(["add", "--title", "Pan", "--description", "Pan integral"])
        .args(["--price", "90", "--thumbnail", "pan.jpg", "--code", "PAN1", "--stock", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (4): Pan"));

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3, 4]);
}

#[test]
fn flags_override_json_fields() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args([
            "add",
            "--json",
            r#"{"title":"Pan","description":"d","price":1,"thumbnail":"p.jpg","code":"PAN1","stock":1}"#,
            "--price",
            "75.5",
        ])
        .assert()
        .success();

    prodcat(temp.path())
        .args(["find", "PAN1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75.50"));
}

#[test]
fn unknown_ids_are_not_errors() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();

    prodcat(temp.path())
        .args(["update", "9", "--stock", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product with id 9"));

    prodcat(temp.path())
        .args(["get", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product with id 9"));

    prodcat(temp.path())
        .args(["rm", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product with id 9"));

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3]);
}

#[test]
fn update_without_fields_fails() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn corrupt_catalog_is_empty_unless_strict() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("products.json"), "{ broken").unwrap();

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));

    prodcat(temp.path())
        .args(["config", "strict-load", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict-load set to true"));

    prodcat(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn config_file_name_moves_the_catalog() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["config", "file-name", "productos.json"])
        .assert()
        .success();
    prodcat(temp.path()).arg("seed").assert().success();

    assert!(temp.path().join("productos.json").exists());
    assert!(!temp.path().join("products.json").exists());

    prodcat(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file-name = productos.json"));
}

#[test]
fn explicit_file_flag() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("elsewhere").join("catalog.json");

    prodcat(temp.path())
        .arg("--file")
        .arg(&file)
        .arg("seed")
        .assert()
        .success();

    assert!(file.exists());
}

#[test]
fn home_env_selects_directory() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("prodcat").unwrap();
    cmd.env("PRODCAT_HOME", temp.path())
        .env("NO_COLOR", "1")
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized catalog"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("products.json").exists());
}

#[test]
fn demo_walkthrough() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find by code BVCD15"))
        .stdout(predicate::str::contains("1600.00"))
        .stdout(predicate::str::contains("Product removed (1): Leche"))
        .stdout(predicate::str::contains("Remaining products"));

    assert_eq!(stored_ids(temp.path()), vec![2, 3]);
}

#[test]
fn no_command_lists() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn non_finite_price_is_rejected() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();

    prodcat(temp.path())
        .args(["add", "--title", "Pan", "--description", "Pan integral"])
        .args(["--price", "NaN", "--thumbnail", "pan.jpg", "--code", "PAN1", "--stock", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be a finite number"));

    prodcat(temp.path())
        .args(["update", "2", "--price", "inf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be a finite number"));

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3]);
}

#[test]
fn highest_possible_id_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let catalog = format!(
        r#"[{{"id":{},"title":"Top","description":"d","price":1,"thumbnail":"t.jpg","code":"TOP1","stock":1}}]"#,
        u64::MAX
    );
    fs::write(temp.path().join("products.json"), &catalog).unwrap();

    prodcat(temp.path())
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product ids left"));

    assert_eq!(
        fs::read_to_string(temp.path().join("products.json")).unwrap(),
        catalog
    );
}

#[test]
fn unreadable_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path()).arg("seed").assert().success();
    fs::write(temp.path().join("config.json"), "{ \"strict_load\": tru").unwrap();

    prodcat(temp.path())
        .args(["remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error: cannot read"));

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3]);
}

#[test]
fn config_reports_the_file_in_use() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog file in use:"))
        .stdout(predicate::str::contains("products.json"));
}
