/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Object key cannot be empty")]
    EmptyObjectKey,

    #[error("Object key too long: {actual} bytes (max: {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },

    #[error("Invalid character in object key: '{0}'")]
    InvalidObjectKeyCharacter(char),

    #[error("Object key cannot start with '/'")]
    ObjectKeyStartsWithSlash,

    #[error("Object key cannot contain '//'")]
    ObjectKeyContainsDoubleSlash,
}
