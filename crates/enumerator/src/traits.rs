use crate::error::{ParseError, UnmarshalError};
use std::borrow::Cow;

///
/// Enumerated
///
/// Closed set of declared values with a cyclic successor.
/// `next` maps every undefined value to `FIRST`.
///

pub trait Enumerated: Sized {
    const TYPE_NAME: &'static str;
    const FIRST: Self;
    const LEN: usize;

    #[must_use]
    fn next(&self) -> Self;

    fn is_defined(&self) -> bool;
}

///
/// Scan
///
/// Reads one whitespace-delimited token from `input` and advances it.
///

pub trait Scan: Sized {
    fn scan(input: &mut &str) -> Result<Self, ParseError>;
}

///
/// TextMarshal
///

pub trait TextMarshal {
    fn marshal_text(&self) -> Cow<'static, [u8]>;
}

///
/// TextUnmarshal
///
/// On error `self` is left untouched.
///

pub trait TextUnmarshal {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), UnmarshalError>;
}
