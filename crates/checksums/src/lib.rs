#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` computes content fingerprints: 128-bit MD5 digests of a file's
//! byte stream. Two files are treated as identical exactly when their
//! fingerprints are equal; timestamps, permissions and other metadata never
//! influence the result.
//!
//! # Design
//!
//! - [`strong::Md5`] is the streaming hasher.
//! - [`Fingerprint`] is the digest value. [`Fingerprint::from_reader`] feeds a
//!   reader through the hasher in [`CHUNK_SIZE`] blocks.
//! - [`ContentFingerprinter`] is the component the reconciler talks to. It
//!   converts I/O failures into a logged error and a `None` result so a file
//!   that vanished mid-cycle is skipped rather than aborting the run.
//!
//! # Examples
//!
//! ```
//! use checksums::Fingerprint;
//!
//! let digest = Fingerprint::of(b"hello");
//! assert_eq!(digest.to_hex(), "5d41402abc4b2a76b9719d911017c592");
//! ```

mod fingerprint;
mod fingerprinter;
pub mod strong;

pub use fingerprint::{CHUNK_SIZE, Fingerprint};
pub use fingerprinter::ContentFingerprinter;
