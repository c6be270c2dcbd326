/// Boxed source error from the storage backend.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from blob store operations.
///
/// Every backend failure is wrapped with the operation and key it happened
/// on; sources are preserved for diagnosis but credentials never appear in
/// messages. Nothing here is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested blob does not exist in the backend.
    ///
    /// Distinguished from [`StoreError::BackendRead`] because callers map
    /// it to a "not found" response rather than a server error.
    #[error("blob not found: {key}")]
    NotFound { key: String },

    /// A get/head/list call to the backend failed.
    #[error("backend read failed ({op} {key}): {source}")]
    BackendRead {
        op: &'static str,
        key: String,
        #[source]
        source: BoxedError,
    },

    /// A put/delete call to the backend failed.
    #[error("backend write failed ({op} {key}): {source}")]
    BackendWrite {
        op: &'static str,
        key: String,
        #[source]
        source: BoxedError,
    },

    /// Malformed backend configuration detected at call time, never
    /// silently defaulted.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl StoreError {
    pub(crate) fn read(
        op: &'static str,
        key: impl Into<String>,
        source: impl Into<BoxedError>,
    ) -> Self {
        Self::BackendRead {
            op,
            key: key.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(
        op: &'static str,
        key: impl Into<String>,
        source: impl Into<BoxedError>,
    ) -> Self {
        Self::BackendWrite {
            op,
            key: key.into(),
            source: source.into(),
        }
    }

    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_operation_and_key() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = StoreError::write("put", "abc123", io);
        let msg = err.to_string();
        assert!(msg.contains("put"));
        assert!(msg.contains("abc123"));
    }

    #[test]
    fn not_found_names_the_key() {
        let err = StoreError::not_found("deadbeef");
        assert_eq!(err.to_string(), "blob not found: deadbeef");
    }

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow backend");
        let err = StoreError::read("get", "k", io);
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("slow backend"));
    }
}
