#![forbid(unsafe_code)]

//! Field state for text input.
//!
//! A [`Field`] holds one logical field's value together with the validity
//! flags a binding layer reads: the formatted value, `is_valid`, the
//! current error message, and emptiness. Every write re-runs the
//! configured formatter and validator synchronously, so readers never see
//! a stale or partially updated state.
//!
//! [`LoadingState`] and [`Loadable`] cover the other binding-layer state
//! shape: a resource that is idle, loading, loaded, or failed.

pub mod field;
pub mod loading;

pub use field::Field;
pub use loading::{Loadable, LoadingState};
