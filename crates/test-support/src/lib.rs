#![deny(unsafe_code)]

//! Fixtures shared by the workspace's unit and integration tests.
//!
//! [`TestDir`] owns a temporary directory, [`FileTree`] describes a tree to
//! materialise inside it, and [`snapshot`] captures a tree as a
//! [`BTreeMap`] so two trees can be compared with a single `assert_eq!`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct TestDir {
    inner: TempDir,
}

impl TestDir {
    /// Creates a fresh temporary directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            inner: tempfile::tempdir()?,
        })
    }

    /// Root path of the directory.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Joins `relative` onto the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.inner.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads the file at `relative`.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    /// Reports whether `relative` exists (without following a final symlink).
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        fs::symlink_metadata(self.join(relative)).is_ok()
    }
}

/// Declarative description of a directory tree.
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    nodes: BTreeMap<PathBuf, Node>,
}

impl FileTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file; parent directories are implied.
    pub fn text_file(&mut self, relative: impl AsRef<Path>, contents: &str) -> &mut Self {
        self.file(relative, contents.as_bytes())
    }

    /// Adds a file with arbitrary contents.
    pub fn file(&mut self, relative: impl AsRef<Path>, contents: &[u8]) -> &mut Self {
        self.nodes
            .insert(relative.as_ref().to_path_buf(), Node::File(contents.to_vec()));
        self
    }

    /// Adds an (empty) directory.
    pub fn dir(&mut self, relative: impl AsRef<Path>) -> &mut Self {
        self.nodes
            .insert(relative.as_ref().to_path_buf(), Node::Dir);
        self
    }

    /// Materialises the tree below `root`, creating `root` if needed.
    pub fn create_at(&self, root: &Path) -> io::Result<()> {
        fs::create_dir_all(root)?;
        for (relative, node) in &self.nodes {
            let path = root.join(relative);
            match node {
                Node::Dir => fs::create_dir_all(&path)?,
                Node::File(contents) => {
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, contents)?;
                }
                Node::Other => {}
            }
        }
        Ok(())
    }

    /// Materialises the tree inside a [`TestDir`].
    pub fn create_in(&self, dir: &TestDir) -> io::Result<()> {
        self.create_at(dir.path())
    }
}

/// One node of a captured or declared tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// A directory.
    Dir,
    /// A regular file with its contents.
    File(Vec<u8>),
    /// Anything else: symlinks, fifos, devices.
    Other,
}

/// Captures every entry below `root`, keyed by relative path.
///
/// Symlinks are recorded as [`Node::Other`] and never followed.
pub fn snapshot(root: &Path) -> io::Result<BTreeMap<PathBuf, Node>> {
    let mut nodes = BTreeMap::new();
    collect(root, Path::new(""), &mut nodes)?;
    Ok(nodes)
}

fn collect(root: &Path, prefix: &Path, nodes: &mut BTreeMap<PathBuf, Node>) -> io::Result<()> {
    for entry in fs::read_dir(root.join(prefix))? {
        let entry = entry?;
        let relative = prefix.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            nodes.insert(relative.clone(), Node::Dir);
            collect(root, &relative, nodes)?;
        } else if file_type.is_file() {
            nodes.insert(relative, Node::File(fs::read(entry.path())?));
        } else {
            nodes.insert(relative, Node::Other);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_creates_and_cleans_up() {
        let path_copy;
        {
            let test_dir = TestDir::new().expect("create test dir");
            path_copy = test_dir.path().to_path_buf();
            assert!(path_copy.exists(), "test dir should exist");
        }
        assert!(!path_copy.exists(), "test dir should be cleaned up");
    }

    #[test]
    fn file_tree_round_trips_through_snapshot() {
        let test_dir = TestDir::new().expect("create test dir");
        let mut tree = FileTree::new();
        tree.text_file("a.txt", "content a")
            .text_file("subdir/b.txt", "content b")
            .dir("empty");
        tree.create_in(&test_dir).expect("create tree");

        let nodes = snapshot(test_dir.path()).expect("snapshot");
        assert_eq!(nodes.get(Path::new("a.txt")), Some(&Node::File(b"content a".to_vec())));
        assert_eq!(nodes.get(Path::new("subdir")), Some(&Node::Dir));
        assert_eq!(nodes.get(Path::new("empty")), Some(&Node::Dir));
        assert_eq!(nodes.len(), 4);
    }
}
