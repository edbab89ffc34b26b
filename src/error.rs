/// Errors returned by the checked operations of [`HashMap`].
///
/// Failed operations never leave the map partially modified.
///
/// [`HashMap`]: crate::HashMap
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key and value sequences passed to
    /// [`HashMap::from_keys_values`](crate::HashMap::from_keys_values) have
    /// different lengths.
    #[error("key and value sequences have different lengths ({keys} keys, {values} values)")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of values supplied.
        values: usize,
    },
    /// Bucket metadata was requested for a key that is not in the map.
    #[error("key not in map, it has no bucket")]
    InvalidKey,
    /// Checked access to a key that is not in the map.
    #[error("key not in map")]
    KeyNotFound,
}

/// Result alias for fallible map operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        let err = Error::LengthMismatch { keys: 3, values: 2 };
        assert_eq!(
            err.to_string(),
            "key and value sequences have different lengths (3 keys, 2 values)"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "key not in map");
        assert_eq!(Error::InvalidKey.to_string(), "key not in map, it has no bucket");
    }
}
