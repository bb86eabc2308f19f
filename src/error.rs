use thiserror::Error;

/// Errors raised by the collections in this crate.
///
/// A lookup miss is not an error: `HashTable::get` returns `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was removed or peeked from a structure holding no values.
    #[error("cannot take a value from an empty structure")]
    EmptyStructure,
    /// A constructor argument was outside of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::EmptyStructure.to_string(),
            "cannot take a value from an empty structure"
        );
        assert_eq!(
            Error::InvalidArgument("capacity must be positive, got 0".to_string()).to_string(),
            "invalid argument: capacity must be positive, got 0"
        );
    }
}
