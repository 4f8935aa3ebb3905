use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

const CATALOG: &str = r#"[
    {"title": "Salad", "ingredients": ["lettuce", "tomato"]},
    {"title": "Omelette", "ingredients": ["egg", "salt"]}
]"#;

fn run_pantry(catalog: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pantry"))
        .arg("--catalog")
        .arg(catalog)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pantry");

    // The process may exit before reading, e.g. on a bad catalog
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn write_catalog(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("recipes.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_pantry"))
        .arg("--help")
        .output()
        .expect("Failed to execute pantry --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("suggest"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("grocery"));
    assert!(stdout.contains("show"));
}

#[test]
fn test_cli_default_prompts_and_ranks() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &[], "Egg, SALT, extra\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Enter the ingredients you have in your fridge"));
    assert!(stdout.contains("--- Recipe Suggestions ---"));
    assert!(stdout.find("Recipe: Omelette").unwrap() < stdout.find("Recipe: Salad").unwrap());
    assert!(stdout.contains("Can make? Yes"));
    assert!(stdout.contains("Missing Ingredients: lettuce, tomato"));
}

#[test]
fn test_cli_malformed_catalog_aborts_before_prompt() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), r#"[{"title": "Omelette"}]"#);

    let output = run_pantry(&catalog, &["suggest"], "egg\n");

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stdout.contains("Enter the ingredients"));
    assert!(stderr.contains("Catalog data error"));
    assert!(stderr.contains("missing field `ingredients`"));
    assert!(!stderr.contains("Data(\""));
}

#[test]
fn test_cli_json_output() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(
        &catalog,
        &["suggest", "--have", "lettuce,tomato", "--format", "json"],
        "",
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["recipe"], "Salad");
    assert_eq!(json[0]["can_make"], true);
    assert_eq!(json[1]["missing_ingredients"], serde_json::json!(["egg", "salt"]));
}

#[test]
fn test_cli_search() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["search", "TOMATO"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Recipe: Salad"));
    assert!(!stdout.contains("Omelette"));
}

#[test]
fn test_cli_grocery() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["grocery", "--have", "egg"], "");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Omelette:\n  [ ] salt\nSalad:\n  [ ] lettuce\n  [ ] tomato\n"
    );
}

#[test]
fn test_cli_no_stdin_is_input_error() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["suggest"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No input received from stdin"));
}

#[test]
fn test_cli_json_output_after_prompt_is_parseable() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["suggest", "--format", "json"], "egg,salt\n");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["recipe"], "Omelette");
    assert_eq!(json[0]["can_make"], true);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Enter the ingredients you have in your fridge"));
}

#[test]
fn test_cli_grocery_json_after_prompt_is_parseable() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["grocery", "--format", "json"], "egg\n");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["recipe"], "Omelette");
    assert_eq!(json[0]["items"], serde_json::json!(["salt"]));
}

#[test]
fn test_cli_keep_blank_counts_empty_ingredient() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let kept = run_pantry(
        &catalog,
        &["--log-level", "info", "suggest", "--have", "", "--keep-blank"],
        "",
    );
    let dropped = run_pantry(&catalog, &["--log-level", "info", "suggest", "--have", ""], "");

    assert!(kept.status.success());
    assert!(dropped.status.success());
    assert!(String::from_utf8(kept.stderr).unwrap().contains("ingredients=1"));
    assert!(String::from_utf8(dropped.stderr).unwrap().contains("ingredients=0"));

    // The "" ingredient satisfies no recipe
    let stdout = String::from_utf8(kept.stdout).unwrap();
    assert_eq!(stdout.matches("Can make? No").count(), 2);
    assert!(!stdout.contains("Can make? Yes"));
}

#[test]
fn test_cli_show_recipe_detail() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["show", "salad", "--have", "Tomato"], "");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Recipe: Salad\n\
         Ingredients:\n\
         \x20 [ ] lettuce\n\
         \x20 [x] tomato\n\
         Missing Ingredients: lettuce\n\
         Can make? No\n"
    );
}

#[test]
fn test_cli_show_unknown_recipe() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path(), CATALOG);

    let output = run_pantry(&catalog, &["show", "Risotto", "--have", "rice"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No recipe titled 'Risotto' in the catalog"));
}
