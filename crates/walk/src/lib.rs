#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal used by the
//! reconciler. The walker enumerates every entry below a root (regular files,
//! directories, symbolic links and special files) without following symbolic
//! links. Directory entries are sorted lexicographically before they are
//! yielded so the sequence never depends on the underlying filesystem's
//! iteration order.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures whether directories are yielded before or
//!   after their contents. The root itself is never yielded.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values
//!   depth-first. In the default pre-order mode a directory is yielded before
//!   its children. With [`WalkBuilder::contents_first`] enabled every directory
//!   is yielded after all of its descendants (post-order), which lets callers
//!   delete a subtree bottom-up while iterating.
//! - [`WalkError`] describes I/O failures encountered while querying metadata
//!   or reading directories.
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments and always live below the root.
//! - Entries that disappear between the parent's listing and their own
//!   inspection are skipped silently; the next traversal will not see them.
//! - A directory's names are listed once, when the walker enters it. Removing
//!   an already-yielded entry therefore never disturbs the traversal.
//! - Traversal never panics; other filesystem failures end the iteration with
//!   a [`WalkError`].
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("tree");
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("nested/more.txt"), b"data")?;
//!
//! let walker = WalkBuilder::new(&root)
//!     .contents_first(true)
//!     .build()?;
//! let order = walker
//!     .map(|entry| entry.map(|entry| entry.relative_path().to_path_buf()))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(
//!     order,
//!     vec![PathBuf::from("nested/more.txt"), PathBuf::from("nested")]
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;


pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::WalkError;
pub use walker::Walker;
