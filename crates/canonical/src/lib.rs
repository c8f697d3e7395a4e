//! Text keys for the carelist directory.
//!
//! Search and filtering compare free text typed by people against names and
//! specialties stored in the dataset. Neither side can be trusted to agree on
//! case or accents ("joão", "JOAO", "João"), so both are reduced to a
//! comparison key before any substring test.
//!
//! ## Pure function guarantee
//!
//! No I/O, no locale dependence. The same input produces the same key on any
//! machine.
//!
//! ## Example
//!
//! ```rust
//! use canonical::{normalize, TermMatcher};
//!
//! assert_eq!(normalize("Cardiología"), "cardiologia");
//!
//! let term = TermMatcher::new("joão");
//! assert!(term.matches("João Silva"));
//! assert!(!term.matches("Maria Souza"));
//! ```

mod normalize;
mod term;

pub use crate::normalize::{contains_normalized, is_combining_diacritic, normalize};
pub use crate::term::TermMatcher;
