#![forbid(unsafe_code)]

//! formkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the member crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```rust
//! use formkit::prelude::*;
//!
//! let mut phone = Field::new(text::phone("enter a full phone number"))
//!     .with_formatter(Mask::phone());
//!
//! phone.set_value("15551234567");
//! assert_eq!(phone.value(), "+1 (555)-123-4567");
//! assert!(phone.is_valid());
//! ```

// --- Mask re-exports -------------------------------------------------------

pub use formkit_mask::{Formatter, Mask, MaskError, PLACEHOLDER};

// --- Validation re-exports -------------------------------------------------

pub use formkit_validate::{
    All, And, Any, InvalidPattern, Not, Or, Predicate, Rules, Validator, Verdict,
};

// --- Field re-exports ------------------------------------------------------

pub use formkit_field::{Field, Loadable, LoadingState};

// --- Store re-exports ------------------------------------------------------

pub use formkit_store::{FileStore, KeyValueStore, MemoryStore, Preference, StoreError};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Field, Formatter, KeyValueStore, Mask, MemoryStore, Preference, Rules, Validator, Verdict,
    };

    pub use crate::{field, mask, store, text, validate};
}

pub use formkit_field as field;
pub use formkit_mask as mask;
pub use formkit_store as store;
pub use formkit_validate as validate;
pub use formkit_validate::text;
