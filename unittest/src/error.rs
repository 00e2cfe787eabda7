//! Configuration errors for [`Test`](crate::Test).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("repeat count must be at least 1")]
    ZeroRepeat,
    #[error("test name must not be empty")]
    EmptyName,
}
