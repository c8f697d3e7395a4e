//! # carelist records
//!
//! The data side of the directory: what a professional record looks like,
//! how a dataset is read from disk, and how the process holds on to the set
//! it is serving.
//!
//! - [`Record`] / [`RecordSet`]: the immutable, ordered collection queries run over.
//! - [`load_dataset`] / [`load_or_empty`]: JSON loader. Startup uses the
//!   lenient variant so a missing or broken file yields an empty directory
//!   instead of a dead process.
//! - [`RecordStore`]: current snapshot behind an atomic `Arc` swap, so a
//!   reload never exposes a half-updated set to in-flight queries.
//!
//! ```rust
//! use records::{Record, RecordSet, RecordStore};
//!
//! let store = RecordStore::new(RecordSet::new(vec![
//!     Record::new(1, "João Silva", "Cardiologia", true),
//! ]));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.len(), 1);
//! ```

mod error;
mod loader;
mod store;
mod types;

pub use crate::error::LoadError;
pub use crate::loader::{load_dataset, load_or_empty};
pub use crate::store::RecordStore;
pub use crate::types::{Record, RecordSet};
