//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as an opaque source
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Bakery
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function (bad address or type)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The asset resolver could not locate an address
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// A container type could not be instantiated
    #[error("Failed to instantiate container {type_name}: {message}")]
    Instantiation {
        /// Name of the container type
        type_name: String,
        /// Description of the failure
        message: String,
    },

    /// The data baker failed while populating a container
    #[error("Bake error: {message}")]
    Bake {
        /// Description of the bake failure
        message: String,
        /// Original baker error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Cooperative cancellation was observed
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// The operation that was cancelled
        operation: String,
    },

    /// Operation attempted after teardown
    #[error("{component} has been disposed")]
    Disposed {
        /// The component that was disposed
        component: String,
    },

    /// A load was registered twice for the same key
    #[error("Load already tracked for key {key}")]
    AlreadyTracked {
        /// Rendered cache key
        key: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::Instantiation {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Load pipeline error creation methods
impl Error {
    /// Create a bake error
    pub fn bake<S: Into<String>>(message: S) -> Self {
        Self::Bake {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bake error wrapping the baker's own error
    pub fn bake_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Bake {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Create a disposed error
    pub fn disposed<S: Into<String>>(component: S) -> Self {
        Self::Disposed {
            component: component.into(),
        }
    }

    /// Create an already tracked error
    pub fn already_tracked<S: Into<String>>(key: S) -> Self {
        Self::AlreadyTracked { key: key.into() }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// True for cooperative cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// True when the resolver could not locate the address
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the operation hit a disposed component
    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed { .. })
    }

    /// Classify an error raised by a data baker.
    ///
    /// Cancellation, disposal and errors that are already bake errors pass
    /// through; anything else is wrapped into [`Error::Bake`] with the
    /// original error kept as the source.
    pub fn into_bake_error(self, container: &str) -> Self {
        match self {
            err @ (Self::Cancelled { .. } | Self::Disposed { .. } | Self::Bake { .. }) => err,
            other => Self::Bake {
                message: format!("failed to bake {container}: {other}"),
                source: Some(Box::new(other)),
            },
        }
    }
}
