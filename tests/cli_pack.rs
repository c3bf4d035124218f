mod common;

use std::process::Command;

use common::{tar_available, TestEnv};

#[test]
fn test_pack_writes_timestamped_archive_and_prints_path() {
    if !tar_available() {
        return;
    }
    let env = TestEnv::new().with_site();

    let result = env.run(&["pack"]);
    assert!(result.success, "{}", result.combined_output());

    let archives = env.archives();
    assert_eq!(archives.len(), 1);
    let name = archives[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("web_static_"), "{name}");
    assert!(name.ends_with(".tgz"), "{name}");
    // web_static_ + 14 digits + .tgz
    assert_eq!(name.len(), "web_static_".len() + 14 + ".tgz".len());

    let last_line = result.stdout.lines().last().unwrap();
    assert!(last_line.ends_with(&name), "stdout:\n{}", result.stdout);
}

#[test]
fn test_pack_archive_has_source_as_single_top_level_dir() {
    if !tar_available() {
        return;
    }
    let env = TestEnv::new().with_site();
    assert!(env.run(&["pack"]).success);

    let archive = &env.archives()[0];
    let listing = Command::new("tar")
        .arg("-tzf")
        .arg(archive)
        .output()
        .unwrap();
    assert!(listing.status.success());

    let entries = String::from_utf8_lossy(&listing.stdout);
    assert!(entries.lines().any(|l| l.ends_with("web_static/index.html")));
    assert!(
        entries
            .lines()
            .all(|l| l.trim_start_matches("./").starts_with("web_static")),
        "unexpected entries:\n{entries}"
    );
}

#[test]
fn test_pack_source_and_output_flags() {
    if !tar_available() {
        return;
    }
    let env = TestEnv::new();
    env.write_project_file("public/index.html", "hi");

    let result = env.run(&["pack", "--source", "public", "--output", "dist"]);
    assert!(result.success, "{}", result.combined_output());

    let entries: Vec<_> = std::fs::read_dir(env.project_path("dist"))
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("public_"));
}

#[test]
fn test_pack_missing_source_fails() {
    let env = TestEnv::new();

    let result = env.run(&["pack"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Packing failed."), "{}", result.stdout);
    assert!(env.archives().is_empty());
}

#[test]
fn test_pack_output_path_that_is_a_file_fails() {
    let env = TestEnv::new().with_site();
    env.write_project_file("versions", "not a directory");

    let result = env.run(&["pack"]);
    assert!(!result.success);
    assert!(result.stdout.contains("Packing failed."));
}

#[test]
fn test_pack_source_from_env() {
    if !tar_available() {
        return;
    }
    let env = TestEnv::new();
    env.write_project_file("site/index.html", "hi");

    let result = env.run_with_env(&["pack"], &[("WEBSHIP_SOURCE", "site")]);
    assert!(result.success, "{}", result.combined_output());
    let name = env.archives()[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("site_"));
}

#[test]
fn test_pack_json_events() {
    if !tar_available() {
        return;
    }
    let env = TestEnv::new().with_site();

    let result = env.run(&["pack", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.events();
    assert_eq!(events[0]["event"], "pack_start");
    assert_eq!(events[0]["command"], "pack");
    let packed = events.last().unwrap();
    assert_eq!(packed["event"], "packed");
    assert!(packed["digest"].as_str().unwrap().starts_with("sha256:"));
    assert!(packed["size"].as_u64().unwrap() > 0);
}
