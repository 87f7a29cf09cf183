#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` hosts the tree reconciler: one call to [`Reconciler::reconcile`]
//! makes a replica directory agree with a source directory. Regular files and
//! directories are mirrored, stale replica entries are removed, and every
//! mutation is reported to the [`logging::EventLog`] supplied at construction.
//!
//! # Design
//!
//! A cycle runs two passes over freshly walked trees and keeps no state
//! between cycles:
//!
//! - the forward pass walks the source pre-order, creating directories before
//!   their contents and copying or updating files whose content fingerprints
//!   differ;
//! - the reverse pass walks the replica post-order and removes everything that
//!   has no counterpart in the source, children before their parents.
//!
//! Change detection is content based. Timestamps are copied along with the
//! bytes but never consulted when deciding whether a file needs an update.
//!
//! # Errors
//!
//! Per-file races (an entry vanishing mid-cycle, a fingerprint that cannot be
//! computed) are skipped and counted in the [`CycleSummary`]. Anything else
//! aborts the cycle with a [`ReconcileError`]; the next cycle's full re-walk is
//! the recovery path.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use std::sync::Arc;
//!
//! use engine::Reconciler;
//! use logging::MemoryLog;
//!
//! let temp = tempfile::tempdir()?;
//! let source = temp.path().join("source");
//! let replica = temp.path().join("replica");
//! fs::create_dir(&source)?;
//! fs::write(source.join("a.txt"), b"hello")?;
//!
//! let log = Arc::new(MemoryLog::new());
//! let reconciler = Reconciler::new(log.clone());
//! let summary = reconciler.reconcile(&source, &replica)?;
//!
//! assert_eq!(summary.files_copied(), 1);
//! assert_eq!(fs::read(replica.join("a.txt"))?, b"hello");
//! assert!(reconciler.reconcile(&source, &replica)?.is_noop());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod event;
mod kind;
mod options;
mod reconcile;
mod summary;

pub use error::ReconcileError;
pub use event::SyncEvent;
pub use kind::EntryKind;
pub use options::MirrorOptions;
pub use reconcile::Reconciler;
pub use summary::CycleSummary;
