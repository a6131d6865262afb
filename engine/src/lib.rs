//! Applies parsed player records onto framework-managed form trees.
//!
//! The engine works against the [`ManagedHost`] abstraction rather than a
//! concrete DOM. Values are written the way a human edit would produce
//! them (canonical setter, then `input` and `change` events), labels are
//! matched by exact text, and every lookup miss is recorded instead of
//! aborting the run.
//!
//! - [`synchronize`] — run the five passes for a parsed record.
//! - [`fill_from_source`] — read profile text, parse it and synchronize.
//! - [`FormDocument`] — in-memory host with JSON snapshots, used by the
//!   CLI and the tests.
//! - [`SyncConfig`] — section titles, labels, fallbacks and delays.
//!
//! # Example
//!
//! ```
//! use profile_sync_engine::{FormDocument, NodeSpec, SyncConfig, fill_from_source};
//!
//! let mut form = FormDocument::from_spec(&NodeSpec::element(
//!     "main",
//!     vec![
//!         NodeSpec::element("h2", vec![NodeSpec::text("Player Skills")]),
//!         NodeSpec::element(
//!             "ul",
//!             vec![
//!                 NodeSpec::element("li", vec![NodeSpec::text("Heading"), NodeSpec::checkbox(true)]),
//!                 NodeSpec::element("li", vec![NodeSpec::text("Long Range Drive"), NodeSpec::checkbox(false)]),
//!             ],
//!         ),
//!     ],
//! ));
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//! let run = runtime
//!     .block_on(fill_from_source(
//!         &mut "CARD PLAYER SKILL:\n*Long Range Drive",
//!         &mut form,
//!         &SyncConfig::default().immediate(),
//!     ))
//!     .unwrap();
//!
//! assert_eq!(run.report.applied_count(), 1);
//! assert_eq!(run.report.pass(profile_sync_engine::report::PassKind::Skills).unwrap().bulk_changed, 1);
//! ```

pub mod config;
pub mod controls;
pub mod document;
pub mod error;
pub mod locate;
pub mod passes;
pub mod report;
pub mod source;
pub mod tree;

pub use config::SyncConfig;
pub use controls::Synchronizer;
pub use document::{FormDocument, NodeId, NodeSpec};
pub use error::{HostError, Result, SyncError};
pub use passes::synchronize;
pub use report::{FieldOutcome, FieldStatus, PassKind, SyncReport};
pub use source::{FillRun, ReaderSource, TextSource, fill_from_source};
pub use tree::{ControlKind, FormTree, HostEvent, ManagedHost};
