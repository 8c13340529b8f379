use thiserror::Error as ThisError;

///
/// ParseError
/// Returned by generated `Scan` / `FromStr` impls.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseError {
    #[error("unknown {type_name} value: {token}")]
    Unknown {
        type_name: &'static str,
        token: String,
    },

    #[error("expected a {type_name} value, found end of input")]
    Empty { type_name: &'static str },
}

impl ParseError {
    pub fn unknown(type_name: &'static str, token: impl Into<String>) -> Self {
        Self::Unknown {
            type_name,
            token: token.into(),
        }
    }

    #[must_use]
    pub const fn empty(type_name: &'static str) -> Self {
        Self::Empty { type_name }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unknown { type_name, .. } | Self::Empty { type_name } => type_name,
        }
    }
}

///
/// UnmarshalError
/// Returned by generated `TextUnmarshal` impls; keeps the raw input.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("failed to parse value {:?} into {type_name}", String::from_utf8_lossy(.input))]
pub struct UnmarshalError {
    pub input: Vec<u8>,
    pub type_name: &'static str,
}

impl UnmarshalError {
    #[must_use]
    pub fn new(type_name: &'static str, input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            type_name,
        }
    }
}
