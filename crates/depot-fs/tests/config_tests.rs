use depot_fs::{ConfigStore, Error, Location};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    retries: u32,
    tags: Vec<String>,
}

fn sample() -> Sample {
    Sample {
        name: "depot".into(),
        retries: 3,
        tags: vec!["a".into(), "b".into()],
    }
}

#[rstest]
#[case("config.toml")]
#[case("config.json")]
#[case("config.yaml")]
#[case("config.yml")]
fn save_then_load_each_format(#[case] file: &str) {
    let temp = TempDir::new().unwrap();
    let location = Location::absolute(temp.path().join("nested").join(file));
    let store = ConfigStore::new();

    store.save(&location, &sample()).unwrap();
    let loaded: Sample = store.load(&location).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn load_toml_written_by_hand() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("c.toml");
    fs::write(&path, "name = \"x\"\nretries = 1\ntags = []\n").unwrap();

    let loaded: Sample = ConfigStore::new().load(&Location::absolute(&path)).unwrap();
    assert_eq!(loaded.name, "x");
}

#[test]
fn save_replaces_longer_previous_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("c.json");
    fs::write(&path, " ".repeat(4096)).unwrap();

    let location = Location::absolute(&path);
    ConfigStore::new().save(&location, &sample()).unwrap();
    let loaded: Sample = ConfigStore::new().load(&location).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("c.ini");
    fs::write(&path, "name=x").unwrap();

    let result: Result<Sample, _> = ConfigStore::new().load(&Location::absolute(&path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn malformed_content_reports_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("c.toml");
    fs::write(&path, "name = ").unwrap();

    let result: Result<Sample, _> = ConfigStore::new().load(&Location::absolute(&path));
    assert!(matches!(result, Err(Error::ConfigParse { format, .. }) if format == "TOML"));
}

#[test]
fn missing_file_is_not_a_file() {
    let temp = TempDir::new().unwrap();
    let result: Result<Sample, _> =
        ConfigStore::new().load(&Location::absolute(temp.path().join("none.toml")));
    assert!(matches!(result, Err(Error::SourceNotFile { .. })));
}
