//! Integration tests for zippath-core.
//!
//! These tests build real trees on disk, run the task, and read the produced
//! archive back.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;
use zippath_core::TaskOptions;
use zippath_core::ZipPathConfig;
use zippath_core::ZipPathError;
use zippath_core::run_task;
use zippath_core::sidecar::SIDECAR_XML;
use zippath_core::zip_path;

/// Reads every member of a zip into `name -> contents`.
fn read_zip(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut members = BTreeMap::new();
    for i in 0..archive.len() {
        let mut member = archive.by_index(i).unwrap();
        let mut data = Vec::new();
        member.read_to_end(&mut data).unwrap();
        let previous = members.insert(member.name().to_string(), data);
        assert!(previous.is_none(), "duplicate member {}", member.name());
    }
    members
}

/// Creates `root/<rel>` with `contents` for each entry.
fn build_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

fn site_tree(temp: &TempDir) -> std::path::PathBuf {
    let site = temp.path().join("site");
    build_tree(
        &site,
        &[
            ("index.html", "<html></html>"),
            ("css/app.css", "body {}"),
            ("js/app.js", "console.log(1)"),
            ("js/app.js.map", "{}"),
            ("node_modules/lib/index.js", "module.exports = 1"),
            ("build/out.bin", "binary"),
            ("build/nested/more.bin", "more"),
            ("notes.tmp", "scratch"),
        ],
    );
    site
}

#[test]
fn test_directory_without_exclusions_roundtrips() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let report = zip_path(&ZipPathConfig::new(&site)).unwrap();

    assert_eq!(report.archive_path.file_name().unwrap(), "site.zip");
    assert_eq!(
        report.archive_path.parent().unwrap(),
        dunce::canonicalize(temp.path()).unwrap()
    );

    let members = read_zip(&report.archive_path);
    assert_eq!(members.len(), 8);
    assert_eq!(members["index.html"], b"<html></html>");
    assert_eq!(members["build/nested/more.bin"], b"more");
    assert_eq!(members["node_modules/lib/index.js"], b"module.exports = 1");
    assert_eq!(report.files_added, 8);
}

#[test]
fn test_directory_with_exclusions() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let config = ZipPathConfig::new(&site).with_exclude_patterns(vec![
        "*.map".to_string(),
        "node_modules".to_string(),
        "build/*".to_string(),
        "*.tmp".to_string(),
    ]);
    let report = zip_path(&config).unwrap();

    let names: Vec<_> = read_zip(&report.archive_path).into_keys().collect();
    assert_eq!(names, vec!["css/app.css", "index.html", "js/app.js"]);
}

#[test]
fn test_excluded_directory_is_pruned_entirely() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let config = ZipPathConfig::new(&site).with_exclude_patterns(vec!["build".to_string()]);
    let report = zip_path(&config).unwrap();

    let members = read_zip(&report.archive_path);
    assert!(members.keys().all(|name| !name.starts_with("build/")));
    assert_eq!(report.directories_pruned, 1);
    assert_eq!(report.files_excluded, 0);
}

#[test]
fn test_single_file_source() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a");
    fs::write(&file, "payload").unwrap();

    let report = zip_path(&ZipPathConfig::new(&file)).unwrap();

    assert_eq!(report.archive_path.file_name().unwrap(), "a.zip");
    let members = read_zip(&report.archive_path);
    assert_eq!(members.len(), 1);
    assert_eq!(members["a"], b"payload");
}

#[test]
fn test_single_file_replaces_extension() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data.csv");
    fs::write(&file, "x,y\n").unwrap();

    let report = zip_path(&ZipPathConfig::new(&file)).unwrap();

    assert_eq!(report.archive_path.file_name().unwrap(), "data.zip");
    assert!(read_zip(&report.archive_path).contains_key("data.csv"));
}

#[test]
fn test_excluded_single_file_gives_empty_archive() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("scratch.tmp");
    fs::write(&file, "x").unwrap();

    let config = ZipPathConfig::new(&file).with_exclude_patterns(vec!["*.tmp".to_string()]);
    let report = zip_path(&config).unwrap();

    assert!(report.archive_path.exists());
    assert!(read_zip(&report.archive_path).is_empty());
    assert_eq!(report.files_excluded, 1);
}

#[test]
fn test_explicit_output_creates_parents() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);
    let output = temp.path().join("dist/deep/bundle.zip");

    let report = zip_path(&ZipPathConfig::new(&site).with_output(&output)).unwrap();

    assert!(output.is_file());
    assert!(report.archive_path.ends_with("dist/deep/bundle.zip"));
}

#[test]
fn test_include_meta_writes_sidecar() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let report = zip_path(&ZipPathConfig::new(&site).with_include_meta(true)).unwrap();

    let sidecar = report.sidecar_path.clone().unwrap();
    assert_eq!(sidecar.file_name().unwrap(), "site.resource-meta.xml");
    assert_eq!(sidecar.parent(), report.archive_path.parent());
    assert_eq!(fs::read(&sidecar).unwrap(), SIDECAR_XML.as_bytes());

    let values = report.return_values();
    assert_eq!(values.len(), 2);
    assert_eq!(values["sidecar_path"], sidecar.display().to_string());
}

#[test]
fn test_sidecar_is_independent_of_contents() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty");
    fs::create_dir(&empty).unwrap();

    let report = zip_path(&ZipPathConfig::new(&empty).with_include_meta(true)).unwrap();

    assert!(read_zip(&report.archive_path).is_empty());
    assert_eq!(
        fs::read_to_string(report.sidecar_path.unwrap()).unwrap(),
        SIDECAR_XML
    );
}

#[test]
fn test_no_sidecar_by_default() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let report = zip_path(&ZipPathConfig::new(&site)).unwrap();

    assert!(report.sidecar_path.is_none());
    assert!(!temp.path().join("site.resource-meta.xml").exists());
    assert_eq!(report.return_values().len(), 1);
}

#[test]
fn test_missing_source_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let options = TaskOptions::new(temp.path().join("absent").display().to_string())
        .with_include_meta(true);

    let err = run_task(options).unwrap_err();

    assert!(matches!(err, ZipPathError::PathNotFound { .. }));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_run_task_with_string_options() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);

    let options = TaskOptions::new(site.display().to_string())
        .with_exclude("*.map, node_modules ,build")
        .with_include_meta("True");
    let report = run_task(options).unwrap();

    let names: Vec<_> = read_zip(&report.archive_path).into_keys().collect();
    assert_eq!(
        names,
        vec!["css/app.css", "index.html", "js/app.js", "notes.tmp"]
    );
    assert!(report.sidecar_path.is_some());
}

#[test]
fn test_run_task_from_json_record() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);
    let output = temp.path().join("out.zip");

    let json = serde_json::json!({
        "path": site,
        "output": output,
        "exclude": ["node_modules", "build"],
        "include_meta": "0",
    })
    .to_string();
    let report = run_task(TaskOptions::from_json(&json).unwrap()).unwrap();

    assert!(report.sidecar_path.is_none());
    assert_eq!(read_zip(&output).len(), 5);
}

#[test]
fn test_output_inside_source_is_not_self_included() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);
    let output = site.join("self.zip");

    zip_path(&ZipPathConfig::new(&site).with_output(&output)).unwrap();

    let members = read_zip(&output);
    assert!(!members.contains_key("self.zip"));
    assert_eq!(members.len(), 8);
}

#[test]
fn test_existing_archive_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);
    fs::write(temp.path().join("site.zip"), "not a zip").unwrap();

    let report = zip_path(&ZipPathConfig::new(&site)).unwrap();

    assert_eq!(read_zip(&report.archive_path).len(), 8);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_propagates_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let site = site_tree(&temp);
    let locked = site.join("locked.txt");
    fs::write(&locked, "secret").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits don't stop root.
    if File::open(&locked).is_ok() {
        return;
    }

    let err = zip_path(&ZipPathConfig::new(&site)).unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(matches!(err, ZipPathError::Io(_)));
    // The partial archive is left where it was written.
    assert!(temp.path().join("site.zip").exists());
}
