use thiserror::Error;

/// Failures reported by host services when a widget asks for work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The named server-side action does not exist.
    #[error("action '{name}' is not known to the host")]
    UnknownAction { name: String },

    /// The named view does not exist.
    #[error("view '{name}' is not known to the host")]
    UnknownView { name: String },

    /// The action or view exists but its execution failed.
    #[error("{message}")]
    ExecutionFailed { message: String },
}

/// Failures reported by widgets during lifecycle calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    /// The widget could not create its drawing primitive.
    #[error("failed to create gauge: {message}")]
    GaugeCreation { message: String },
}

/// Errors that can occur when mutating a [`WidgetRegistry`](crate::WidgetRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetRegistryError {
    /// A widget attempted to register an identifier that already exists.
    #[error("widget id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}
