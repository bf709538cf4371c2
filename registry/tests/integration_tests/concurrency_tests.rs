//! Integration tests for reading the registry from many threads.

use std::sync::Arc;
use std::thread;

use registry::ViewKind;

use super::common::load_registry;

#[test]
fn test_concurrent_reads() {
    let registry = Arc::new(load_registry());
    let expected = registry
        .legacy()
        .get_content("server", "python", "flask")
        .unwrap();

    thread::scope(|scope| {
        for i in 0..8 {
            let registry = Arc::clone(&registry);
            let expected = Arc::clone(&expected);
            scope.spawn(move || {
                let kind = if i % 2 == 0 {
                    ViewKind::Legacy
                } else {
                    ViewKind::Reorganized
                };
                let view = registry.view(kind);
                for (path, _) in view.paths() {
                    view.get_content(&path.category, &path.sub_category, &path.key)
                        .unwrap();
                }

                let flask = registry
                    .reorganized()
                    .get_content("python", "sdks", "flask")
                    .unwrap();
                assert!(Arc::ptr_eq(&flask, &expected));
            });
        }
    });
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<registry::Registry>();
}
