#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `scheduler` drives reconciliation cycles on a fixed interval. The first
//! cycle runs immediately; each following cycle starts `interval` after the
//! previous one finished, so cycles never overlap and a slow cycle simply
//! delays the next one.
//!
//! # Stopping
//!
//! A [`StopSignal`] is owned by the loop and a cloneable [`StopHandle`] is
//! given to whoever decides when to stop (a signal-forwarding thread, a test).
//! The inter-cycle wait is a timed channel receive, so a stop request ends the
//! wait at once. A cycle already in progress always runs to completion.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroU64;
//! use std::time::Duration;
//!
//! use engine::CycleSummary;
//! use scheduler::{Scheduler, StopReason, StopSignal};
//!
//! let stop = StopSignal::new();
//! let mut runs = 0;
//! let summary = Scheduler::new(Duration::ZERO)
//!     .max_cycles(NonZeroU64::new(3))
//!     .run(
//!         || {
//!             runs += 1;
//!             Ok::<_, std::io::Error>(CycleSummary::default())
//!         },
//!         &stop,
//!     )?;
//!
//! assert_eq!(runs, 3);
//! assert_eq!(summary.cycles(), 3);
//! assert_eq!(summary.stop_reason(), StopReason::CycleLimit);
//! # Ok::<(), std::io::Error>(())
//! ```

mod runner;
mod stop;
mod summary;

pub use runner::Scheduler;
pub use stop::{StopHandle, StopSignal};
pub use summary::{RunSummary, StopReason};
