use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("state not registered: {type_name}")]
    StateNotFound { type_name: &'static str },

    #[error("compute not registered: {type_name}")]
    ComputeNotFound { type_name: &'static str },

    #[error("command not registered: {type_name}")]
    CommandNotFound { type_name: &'static str },
}
