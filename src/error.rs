use thiserror::Error;

/// Structural problems found while decoding a raw subject record.
///
/// Field paths use the dotted names of the raw layout, e.g. `exp.info.exp.id`
/// or `final.df[12].datetime`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("field '{0}' is empty")]
    EmptyField(String),

    #[error("field '{0}' contains a tab or line break")]
    LineBreak(String),

    #[error("field '{field}' is not a date: '{value}'")]
    InvalidDate { field: String, value: String },
}

impl DecodeError {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) | Self::LineBreak(field) => field,
            Self::WrongType { field, .. } | Self::InvalidDate { field, .. } => field,
        }
    }
}
