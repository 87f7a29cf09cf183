//! End-to-end reconciliation behaviour on real directory trees.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use engine::{MirrorOptions, Reconciler};
use filetime::FileTime;
use logging::{MemoryLog, Severity};
use test_support::{FileTree, TestDir, snapshot};

struct Fixture {
    _dir: TestDir,
    source: PathBuf,
    replica: PathBuf,
    log: Arc<MemoryLog>,
    reconciler: Reconciler,
}

impl Fixture {
    fn new() -> Self {
        Self::with_options(MirrorOptions::default())
    }

    fn with_options(options: MirrorOptions) -> Self {
        let dir = TestDir::new().expect("test dir");
        let source = dir.join("source");
        let replica = dir.join("replica");
        fs::create_dir(&source).expect("create source");
        fs::create_dir(&replica).expect("create replica");
        let log = Arc::new(MemoryLog::new());
        let reconciler = Reconciler::with_options(log.clone(), options);
        Self {
            _dir: dir,
            source,
            replica,
            log,
            reconciler,
        }
    }

    fn sync(&self) -> engine::CycleSummary {
        self.reconciler
            .reconcile(&self.source, &self.replica)
            .expect("reconcile succeeds")
    }

    fn assert_converged(&self) {
        assert_eq!(
            snapshot(&self.source).expect("snapshot source"),
            snapshot(&self.replica).expect("snapshot replica")
        );
    }

    fn src(&self, relative: &str) -> PathBuf {
        self.source.join(relative)
    }

    fn dst(&self, relative: &str) -> PathBuf {
        self.replica.join(relative)
    }
}

fn copied(source: &Path, replica: &Path) -> String {
    format!("File copied: {} -> {}", source.display(), replica.display())
}

#[test]
fn concrete_scenario_updates_and_prunes() {
    let fx = Fixture::new();
    FileTree::new()
        .text_file("a.txt", "hello")
        .text_file("sub/b.txt", "world")
        .create_at(&fx.source)
        .expect("source tree");
    FileTree::new()
        .text_file("a.txt", "hello")
        .text_file("sub/b.txt", "WORLD")
        .text_file("stale.txt", "x")
        .create_at(&fx.replica)
        .expect("replica tree");

    let summary = fx.sync();

    assert_eq!(
        fx.log.messages(),
        vec![
            format!(
                "File updated: {} -> {}",
                fx.src("sub/b.txt").display(),
                fx.dst("sub/b.txt").display()
            ),
            format!("File removed: {}", fx.dst("stale.txt").display()),
            "Synchronization completed".to_string(),
        ]
    );
    assert_eq!(summary.files_updated(), 1);
    assert_eq!(summary.files_removed(), 1);
    assert_eq!(summary.files_copied(), 0);
    assert_eq!(fs::read(fx.dst("sub/b.txt")).expect("read"), b"world");
    fx.assert_converged();
}

#[test]
fn fresh_replica_receives_full_tree() {
    let fx = Fixture::new();
    FileTree::new()
        .text_file("a.txt", "alpha")
        .text_file("nested/deeper/c.txt", "gamma")
        .dir("empty")
        .file("binary.bin", &[0, 159, 146, 150, 255])
        .create_at(&fx.source)
        .expect("source tree");

    let summary = fx.sync();

    assert_eq!(summary.files_copied(), 3);
    assert_eq!(summary.directories_created(), 3);
    fx.assert_converged();

    let messages = fx.log.messages();
    let nested = messages
        .iter()
        .position(|m| *m == format!("Directory created: {}", fx.dst("nested").display()))
        .expect("nested created");
    let deeper = messages
        .iter()
        .position(|m| *m == format!("Directory created: {}", fx.dst("nested/deeper").display()))
        .expect("deeper created");
    let file = messages
        .iter()
        .position(|m| *m == copied(&fx.src("nested/deeper/c.txt"), &fx.dst("nested/deeper/c.txt")))
        .expect("file copied");
    assert!(nested < deeper && deeper < file);
}

#[test]
fn second_cycle_is_a_noop() {
    let fx = Fixture::new();
    FileTree::new()
        .text_file("a.txt", "alpha")
        .text_file("dir/b.txt", "beta")
        .dir("dir/empty")
        .create_at(&fx.source)
        .expect("source tree");

    fx.sync();
    fx.log.take();
    let summary = fx.sync();

    assert!(summary.is_noop());
    assert_eq!(summary.files_skipped(), 0);
    assert_eq!(fx.log.messages(), vec!["Synchronization completed".to_string()]);
    fx.assert_converged();
}

#[test]
fn matching_trees_produce_no_events() {
    let fx = Fixture::new();
    let tree = {
        let mut tree = FileTree::new();
        tree.text_file("a.txt", "same").text_file("x/y.txt", "also same");
        tree
    };
    tree.create_at(&fx.source).expect("source");
    tree.create_at(&fx.replica).expect("replica");

    let summary = fx.sync();

    assert!(summary.is_noop());
    assert_eq!(fx.log.messages(), vec!["Synchronization completed".to_string()]);
}

#[test]
fn same_length_different_bytes_is_updated() {
    let fx = Fixture::new();
    fs::write(fx.src("f.txt"), b"abcd").expect("write source");
    fs::write(fx.dst("f.txt"), b"abce").expect("write replica");
    let shared = FileTime::from_unix_time(1_700_000_000, 0);
    filetime::set_file_mtime(fx.src("f.txt"), shared).expect("mtime");
    filetime::set_file_mtime(fx.dst("f.txt"), shared).expect("mtime");

    let summary = fx.sync();

    assert_eq!(summary.files_updated(), 1);
    assert_eq!(fs::read(fx.dst("f.txt")).expect("read"), b"abcd");
}

#[test]
fn mtime_only_difference_is_not_recopied() {
    let fx = Fixture::new();
    fs::write(fx.src("f.txt"), b"identical").expect("write source");
    fs::write(fx.dst("f.txt"), b"identical").expect("write replica");
    filetime::set_file_mtime(fx.src("f.txt"), FileTime::from_unix_time(1_600_000_000, 0))
        .expect("mtime");
    let replica_mtime = FileTime::from_unix_time(1_500_000_000, 0);
    filetime::set_file_mtime(fx.dst("f.txt"), replica_mtime).expect("mtime");

    let summary = fx.sync();

    assert!(summary.is_noop());
    let metadata = fs::metadata(fx.dst("f.txt")).expect("metadata");
    assert_eq!(FileTime::from_last_modification_time(&metadata), replica_mtime);
}

#[test]
fn copies_carry_source_timestamps() {
    let fx = Fixture::new();
    fs::write(fx.src("dated.txt"), b"content").expect("write");
    let mtime = FileTime::from_unix_time(1_234_567_890, 0);
    filetime::set_file_mtime(fx.src("dated.txt"), mtime).expect("mtime");

    fx.sync();

    let metadata = fs::metadata(fx.dst("dated.txt")).expect("metadata");
    assert_eq!(FileTime::from_last_modification_time(&metadata), mtime);
}

#[test]
fn stale_subtree_is_removed_children_first() {
    let fx = Fixture::new();
    FileTree::new()
        .text_file("old/one.txt", "1")
        .text_file("old/inner/two.txt", "2")
        .dir("old/inner/empty")
        .create_at(&fx.replica)
        .expect("replica tree");

    let summary = fx.sync();

    assert!(!fx.dst("old").exists());
    assert_eq!(summary.directories_removed(), 3);
    assert_eq!(summary.files_removed(), 2);

    let messages = fx.log.messages();
    let position = |needle: String| {
        messages
            .iter()
            .position(|m| *m == needle)
            .unwrap_or_else(|| panic!("missing log line {needle}"))
    };
    let old = position(format!("Directory removed: {}", fx.dst("old").display()));
    let inner = position(format!("Directory removed: {}", fx.dst("old/inner").display()));
    let empty = position(format!("Directory removed: {}", fx.dst("old/inner/empty").display()));
    let two = position(format!("File removed: {}", fx.dst("old/inner/two.txt").display()));
    let one = position(format!("File removed: {}", fx.dst("old/one.txt").display()));

    assert!(empty < inner && two < inner);
    assert!(inner < old && one < old);
    assert_eq!(messages.last().map(String::as_str), Some("Synchronization completed"));
}

#[test]
fn convergence_after_source_churn() {
    let fx = Fixture::new();
    FileTree::new()
        .text_file("keep.txt", "keep")
        .text_file("change.txt", "v1")
        .text_file("drop/me.txt", "bye")
        .dir("grow")
        .create_at(&fx.source)
        .expect("source tree");
    fx.sync();
    fx.assert_converged();

    fs::write(fx.src("change.txt"), b"v2").expect("change");
    fs::remove_dir_all(fx.src("drop")).expect("drop");
    FileTree::new()
        .text_file("grow/new.txt", "fresh")
        .text_file("added/deep/file.txt", "deep")
        .create_at(&fx.source)
        .expect("additions");

    fx.log.take();
    let summary = fx.sync();

    fx.assert_converged();
    assert_eq!(summary.files_updated(), 1);
    assert_eq!(summary.files_copied(), 2);
    assert_eq!(summary.files_removed(), 1);
    assert_eq!(summary.directories_removed(), 1);
    assert!(fx.sync().is_noop());
}

#[test]
fn verified_copies_report_no_failures() {
    let fx = Fixture::with_options(MirrorOptions::default().verify_copies(true));
    FileTree::new()
        .text_file("a.txt", "alpha")
        .text_file("sub/b.txt", "beta")
        .create_at(&fx.source)
        .expect("source tree");
    fs::create_dir(fx.dst("sub")).expect("mkdir");
    fs::write(fx.dst("sub/b.txt"), b"outdated").expect("write");

    let summary = fx.sync();

    assert_eq!(summary.files_copied(), 1);
    assert_eq!(summary.files_updated(), 1);
    assert_eq!(summary.verification_failures(), 0);
    assert!(
        fx.log
            .records()
            .iter()
            .all(|record| record.severity() == Severity::Info)
    );
    fx.assert_converged();
}

#[test]
fn leftover_staging_file_is_pruned() {
    let fx = Fixture::new();
    fs::write(fx.src("a.txt"), b"a").expect("write");
    fs::write(fx.dst(".dirmirror.abc123"), b"partial").expect("write leftover");

    fx.sync();

    assert!(!fx.dst(".dirmirror.abc123").exists());
    fx.assert_converged();
}
