use depot_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        #[cfg(windows)]
        prop_assert!(!as_str.contains('\\'));

        // A leading "//" marks a network path; no other doubled separator survives
        let body = as_str.strip_prefix("//").unwrap_or(as_str);
        prop_assert!(!body.contains("//"));

        prop_assert!(as_str == "/" || !as_str.ends_with('/'));
        // ".." survives only as a leading run of a relative path
        let components: Vec<&str> = as_str.split('/').collect();
        let leading = components.iter().take_while(|c| **c == "..").count();
        prop_assert!(!components[leading..].contains(&".."));
        prop_assert!(leading == 0 || !path.is_absolute());
        prop_assert!(as_str == "." || !as_str.split('/').any(|c| c == "."));

        // Cleaning is idempotent, including through the native form
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(&path, &roundtripped);
    }

    #[test]
    fn test_join_properties(a in "\\PC*", b in "\\PC*") {
        let p1 = NormalizedPath::new(&a);
        let joined = p1.join(&b);

        #[cfg(windows)]
        prop_assert!(!joined.as_str().contains('\\'));

        if b.is_empty() || b == "." {
            prop_assert_eq!(joined, p1);
        }
    }

    #[test]
    fn test_absolute_join_never_escapes_root(segs in proptest::collection::vec("[a-z.]{1,4}", 0..8)) {
        let base = NormalizedPath::new("/");
        let joined = segs.iter().fold(base, |acc, seg| acc.join(seg));
        prop_assert!(joined.is_absolute());
        prop_assert!(!joined.as_str().contains(".."));
    }
}
