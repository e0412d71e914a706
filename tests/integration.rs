use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use vfs_names::cache::{DefaultFilesCache, FilesCache};
use vfs_names::provider::{HostBackend, LocalBackend, parse_uri};
use vfs_names::{ConfigError, FileName, GlobalConfiguration, NameError, NameScope};

// Helper to route library logging to the test harness
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to build a local file name
fn local(path: &str) -> FileName {
    FileName::new("file", path, Arc::new(LocalBackend::new()))
}

const PATHS: &[&str] = &[
    "/",
    "/a",
    "/ab",
    "/a/b",
    "/a/bc",
    "/a/b/c",
    "/a/b/c/d",
    "/usr/local",
    "/usr/local/bin",
    "/usr/local/bin/tool",
    "/usr/share",
];

#[test]
fn test_depth() {
    assert_eq!(local("/").depth(), 0);
    assert_eq!(local("/a/b").depth(), 2);
    assert_eq!(local("/a/b/c").depth(), 3);
}

#[test]
fn test_parent() {
    assert!(local("/").parent().is_none());
    assert_eq!(local("/a/b").parent().unwrap().path(), "/a");
    assert_eq!(local("/a").parent().unwrap().path(), "/");
}

#[test]
fn test_base_name() {
    assert_eq!(local("/a/b/file.txt").base_name(), "file.txt");
}

#[test]
fn test_relative_scenarios() {
    assert_eq!(local("/usr/local").relative_name(&local("/usr/local/bin/tool")), "bin/tool");
    assert_eq!(local("/usr/local/bin").relative_name(&local("/usr/share")), "../../share");
}

#[test]
fn test_resolving_the_relative_name_gives_the_target() {
    init_logging();

    for base in PATHS {
        for target in PATHS {
            let base = local(base);
            let target = local(target);
            let relative = base.relative_name(&target);

            let resolved = base
                .resolve_name(&relative)
                .unwrap_or_else(|e| panic!("{} + {}: {}", base, relative, e));
            assert_eq!(resolved, target, "{} + {}", base, relative);

            if target.is_descendent_of_in(&base, NameScope::DescendentOrSelf) {
                let scoped = base
                    .resolve_name_in(&relative, NameScope::DescendentOrSelf)
                    .unwrap();
                assert_eq!(scoped, target);
            }
        }
    }
}

#[test]
fn test_escape_above_root_is_rejected() {
    init_logging();

    let base = local("/a");
    let result = base.resolve_name_in("../../escape", NameScope::Descendent);
    assert!(matches!(
        result,
        Err(NameError::EscapesRoot(_)) | Err(NameError::InvalidDescendantName(_))
    ));
}

#[test]
fn test_scope_scenarios() {
    let a = local("/a");
    assert!(local("/a/b").is_descendent_of_in(&a, NameScope::Child));
    assert!(!local("/a/b/c").is_descendent_of_in(&a, NameScope::Child));
    assert!(local("/a/b/c").is_descendent_of_in(&a, NameScope::Descendent));
}

#[test]
fn test_scope_monotonicity_on_names() {
    for base in PATHS {
        for path in PATHS {
            let base = local(base);
            let name = local(path);
            if name.is_descendent_of_in(&base, NameScope::Child) {
                assert!(name.is_descendent_of_in(&base, NameScope::Descendent));
            }
            if name.is_descendent_of_in(&base, NameScope::Descendent) {
                assert!(name.is_descendent_of_in(&base, NameScope::DescendentOrSelf));
                assert!(base.is_ancestor_of(&name));
            }
        }
    }
}

#[test]
fn test_equality_and_hash_follow_root_and_path() {
    let mut names = HashSet::new();
    names.insert(parse_uri("ftp://example.com/a/b").unwrap());
    names.insert(parse_uri("ftp://example.com:21/a/./b/").unwrap());
    assert_eq!(names.len(), 1);

    names.insert(parse_uri("ftp://example.com/a/c").unwrap());
    names.insert(parse_uri("ftp://example.com:2121/a/b").unwrap());
    names.insert(parse_uri("sftp://example.com/a/b").unwrap());
    assert_eq!(names.len(), 4);
}

#[test]
fn test_host_names_resolve_on_their_own_host() {
    let backend = HostBackend::new("example.com", Some(21)).with_port(2121);
    let base = FileName::new("ftp", "/pub", Arc::new(backend));

    let name = base.resolve_name("/etc/motd").unwrap();
    assert_eq!(name.uri(), "ftp://example.com:2121/etc/motd");
    assert!(!base.is_ancestor_of(&name));
    assert!(base.resolve_name_in("/etc/motd", NameScope::Descendent).is_err());
}

#[test]
fn test_memoized_attributes_agree_across_threads() {
    let name = Arc::new(parse_uri("zip:file:///tmp/a.zip!/dir/archive.tar.gz").unwrap());

    let results: Vec<(String, String, String)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let name = Arc::clone(&name);
                scope.spawn(move || {
                    (
                        name.uri().to_string(),
                        name.base_name().to_string(),
                        name.extension().to_string(),
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (uri, base_name, extension) in results {
        assert_eq!(uri, "zip:file:///tmp/a.zip!/dir/archive.tar.gz");
        assert_eq!(base_name, "archive.tar.gz");
        assert_eq!(extension, "archive.tar");
    }
}

#[test]
fn test_configuration_lifecycle() {
    init_logging();

    let mut config = GlobalConfiguration::new();
    let cache: Arc<dyn FilesCache> = Arc::new(DefaultFilesCache::with_max_entries(16));
    config.set_files_cache(Arc::clone(&cache)).unwrap();
    config.init().unwrap();

    let base = parse_uri("file:///srv").unwrap();
    let first = config.resolve_name(&base, "www/index.html").unwrap();
    let second = config.resolve_name(&base, "/srv/www/./index.html").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    assert!(matches!(
        config.set_files_cache(Arc::new(DefaultFilesCache::new())),
        Err(ConfigError::InUse)
    ));

    config.close();
    assert!(cache.is_empty());
}
