#![forbid(unsafe_code)]

//! Resource loading state for binding layers.

/// The lifecycle of one loadable resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The resource is available.
    Loaded(T),
    /// The load failed.
    Failed(String),
}

impl<T> LoadingState<T> {
    /// Returns `true` while a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded resource, if available.
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A stateful object that loads one resource and exposes its progress.
pub trait Loadable {
    /// The loaded resource type.
    type Output;

    /// Current loading state.
    fn state(&self) -> &LoadingState<Self::Output>;

    /// Begin (or restart) loading.
    fn load(&mut self);
}
