//! Stat failures and permission errors must surface, never read as "absent".

use depot_fs::{Error, PathHandle};
use tempfile::tempdir;

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn construction_through_a_file_is_a_stat_error() {
        // stat("file/child") fails with ENOTDIR, which is not "not found"
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let result = PathHandle::from_absolute(file.join("child"));

        match result {
            Err(Error::Stat { path, .. }) => assert_eq!(path, file.join("child")),
            other => panic!("expected a stat error, got {other:?}"),
        }
    }

    #[test]
    fn check_exists_propagates_stat_error() {
        let dir = tempdir().unwrap();
        let mut handle = PathHandle::from_absolute(dir.path().join("sub/child")).unwrap();
        assert!(!handle.exists());

        // "sub" turns into a regular file after the handle was resolved
        fs::write(dir.path().join("sub"), "x").unwrap();

        assert!(matches!(handle.check_exists(), Err(Error::Stat { .. })));
        assert!(matches!(handle.classify_type(), Err(Error::Stat { .. })));
    }

    #[test]
    fn construction_under_unreadable_dir_is_a_stat_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let result = PathHandle::from_absolute(locked.join("inner.txt"));

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));

        let err = result.unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn make_dir_in_readonly_parent_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let readonly = dir.path().join("readonly");
        fs::create_dir(&readonly).unwrap();
        fs::set_permissions(&readonly, Permissions::from_mode(0o555)).unwrap();

        let mut handle = PathHandle::from_absolute(readonly.join("child")).unwrap();
        let result = handle.make_dir();

        let _ = fs::set_permissions(&readonly, Permissions::from_mode(0o755));

        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(!handle.exists());
    }

    #[test]
    fn copy_into_readonly_destination_fails_without_rollback() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.txt"), "a").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::set_permissions(&out, Permissions::from_mode(0o555)).unwrap();

        let source = PathHandle::from_absolute(dir.path().join("src")).unwrap();
        let result = source.copy_directory_to(&depot_fs::Location::absolute(&out));

        let _ = fs::set_permissions(&out, Permissions::from_mode(0o755));

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}

#[test]
fn missing_path_is_not_an_error() {
    let dir = tempdir().unwrap();
    let handle = PathHandle::from_absolute(dir.path().join("absent")).unwrap();
    assert!(!handle.check_exists().unwrap());
}
