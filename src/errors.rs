use crate::cli::ValueKind;

#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("unknown parameter \"{0}\"")]
    UnknownParameter(String),

    #[error("unknown argument \"{0}\"")]
    UnknownArgument(String),

    #[error("argument {argument} of type {kind} cannot have invalid value \"{value}\"")]
    InvalidValue {
        argument: &'static str,
        kind: ValueKind,
        value: String,
    },

    #[error("argument {0} expects a value, but none was supplied")]
    MissingValue(&'static str),

    #[error("argument {0} required, but not found")]
    MissingArgument(&'static str),

    #[error("{0}")]
    Io(String),
}

pub type AppResult<T> = Result<T, AppErrors>;
