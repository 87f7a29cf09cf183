//! Paths whose entry type differs between source and replica.

use std::fs;
use std::sync::Arc;

use engine::Reconciler;
use logging::MemoryLog;
use test_support::{FileTree, TestDir, snapshot};

fn setup() -> (TestDir, Arc<MemoryLog>, Reconciler) {
    let dir = TestDir::new().expect("test dir");
    fs::create_dir(dir.join("source")).expect("source");
    fs::create_dir(dir.join("replica")).expect("replica");
    let log = Arc::new(MemoryLog::new());
    let reconciler = Reconciler::new(log.clone());
    (dir, log, reconciler)
}

#[test]
fn source_file_replaces_replica_directory() {
    let (dir, log, reconciler) = setup();
    let source = dir.join("source");
    let replica = dir.join("replica");
    fs::write(source.join("item"), b"now a file").expect("write");
    FileTree::new()
        .text_file("item/inside.txt", "old")
        .create_at(&replica)
        .expect("replica tree");

    let summary = reconciler.reconcile(&source, &replica).expect("reconcile");

    assert_eq!(fs::read(replica.join("item")).expect("read"), b"now a file");
    assert_eq!(summary.directories_removed(), 1);
    assert_eq!(summary.files_copied(), 1);
    assert_eq!(
        log.messages(),
        vec![
            format!("Directory removed: {}", replica.join("item").display()),
            format!(
                "File copied: {} -> {}",
                source.join("item").display(),
                replica.join("item").display()
            ),
            "Synchronization completed".to_string(),
        ]
    );
}

#[test]
fn source_directory_replaces_replica_file() {
    let (dir, log, reconciler) = setup();
    let source = dir.join("source");
    let replica = dir.join("replica");
    FileTree::new()
        .text_file("item/inside.txt", "new")
        .create_at(&source)
        .expect("source tree");
    fs::write(replica.join("item"), b"was a file").expect("write");

    let summary = reconciler.reconcile(&source, &replica).expect("reconcile");

    assert!(replica.join("item").is_dir());
    assert_eq!(summary.files_removed(), 1);
    assert_eq!(summary.directories_created(), 1);
    assert_eq!(summary.files_copied(), 1);

    let messages = log.messages();
    assert_eq!(
        messages[0],
        format!("File removed: {}", replica.join("item").display())
    );
    assert_eq!(
        messages[1],
        format!("Directory created: {}", replica.join("item").display())
    );
    assert_eq!(
        snapshot(&source).expect("source"),
        snapshot(&replica).expect("replica")
    );
}

#[test]
fn type_change_converges_and_then_idles() {
    let (dir, log, reconciler) = setup();
    let source = dir.join("source");
    let replica = dir.join("replica");
    fs::write(source.join("flip"), b"file").expect("write");
    reconciler.reconcile(&source, &replica).expect("first");

    fs::remove_file(source.join("flip")).expect("remove");
    FileTree::new()
        .text_file("flip/child.txt", "child")
        .create_at(&source)
        .expect("dir");
    reconciler.reconcile(&source, &replica).expect("second");

    log.take();
    let summary = reconciler.reconcile(&source, &replica).expect("third");
    assert!(summary.is_noop());
    assert_eq!(log.messages(), vec!["Synchronization completed".to_string()]);
    assert_eq!(
        snapshot(&source).expect("source"),
        snapshot(&replica).expect("replica")
    );
}
