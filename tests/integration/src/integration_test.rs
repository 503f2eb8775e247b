//! End-to-end flow across the workspace
//!
//! Stage a nested tree into a flat directory, then publish every staged file
//! through the transfer drivers configured on disk.

use depot_fs::{ConfigStore, CopySummary, Location, PathHandle, RootDir};
use depot_test_utils::http::OneShotServer;
use depot_test_utils::tree::SourceTree;
use depot_transfer::{Credentials, Driver, TransferConfig, TransferManager};
use pretty_assertions::assert_eq;

fn stage(root: &RootDir) -> CopySummary {
    PathHandle::from_relative(root, "src")
        .unwrap()
        .copy_directory_to(&Location::relative(root, "staging"))
        .unwrap()
}

#[test]
fn test_stage_then_publish_locally() {
    let tree = SourceTree::nested();
    tree.file("upload.toml", "driver = \"local\"\n");
    let root = RootDir::new(tree.root()).unwrap();

    let summary = stage(&root);
    assert_eq!(summary.files_copied, 4);
    tree.assert_flat("staging");

    let config: TransferConfig = ConfigStore::new()
        .load(&Location::relative(&root, "upload.toml"))
        .unwrap();
    assert_eq!(config.driver, Driver::Local);

    let mut published = 0;
    for name in tree.list("staging") {
        let manager = TransferManager::from_local_file(
            &Location::relative(&root, format!("staging/{name}")),
            root.resolve(format!("published/{name}")).to_string(),
            config.clone(),
        )
        .unwrap();
        published += manager.upload().unwrap();
    }

    assert_eq!(published, summary.bytes_copied);
    assert_eq!(tree.list("published"), tree.list("staging"));
    tree.assert_file_contains("published/three.txt", "three");
}

#[test]
fn test_stage_then_publish_remotely() {
    let tree = SourceTree::nested();
    let root = RootDir::new(tree.root()).unwrap();
    stage(&root);

    let config = TransferConfig::remote_repository(Credentials::new("ci", "token"));
    ConfigStore::new()
        .save(&Location::relative(&root, "conf/upload.yaml"), &config)
        .unwrap();
    let loaded: TransferConfig = ConfigStore::new()
        .load(&Location::relative(&root, "conf/upload.yaml"))
        .unwrap();
    assert_eq!(loaded, config);

    let server = OneShotServer::start(201);
    let bytes = TransferManager::from_local_file(
        &Location::relative(&root, "staging/two.txt"),
        server.url("/repository/raw/two.txt"),
        loaded,
    )
    .unwrap()
    .upload()
    .unwrap();
    let request = server.finish();

    assert_eq!(bytes, 3);
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/repository/raw/two.txt");
    assert_eq!(request.header("content-length"), Some("3"));
    assert_eq!(request.body, b"two");
}

#[test]
fn test_restaging_overwrites_and_cleanup_removes_everything() {
    let tree = SourceTree::nested();
    let root = RootDir::new(tree.root()).unwrap();
    stage(&root);

    tree.file("src/a/one.txt", "ONE, revised");
    let summary = stage(&root);
    assert_eq!(summary.bytes_copied, 3 + 12 + 3 + 5);
    tree.assert_file_contains("staging/one.txt", "ONE, revised");

    let mut staging = PathHandle::from_relative(&root, "staging").unwrap();
    staging.delete().unwrap();
    assert!(!staging.check_exists().unwrap());
    tree.assert_file_not_exists("staging");
}
