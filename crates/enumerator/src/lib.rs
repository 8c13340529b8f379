//! ## Crate layout
//! - `error`: runtime errors returned by generated parse and unmarshal code.
//! - `scan`: whitespace token cursor shared by every generated `Scan` impl.
//! - `iter`: full-cycle iteration over generated enumerations.
//! - `traits`: capability contracts every generated block implements.
//!
//! Generated code refers to this crate by absolute path (`::enumerator::…`),
//! so it has to be a direct dependency of any crate that `include!`s
//! generator output.

pub mod error;
pub mod iter;
pub mod scan;
pub mod traits;

pub use error::{ParseError, UnmarshalError};
pub use iter::{Members, members, members_after};
pub use traits::{Enumerated, Scan, TextMarshal, TextUnmarshal};
