//! Fixture crate: `build.rs` generates enumerations for the types in
//! `example`, and the tests drive the generated code.

pub mod example;

#[cfg(test)]
mod tests;
