//! Galaxy forge CLI library.
//!
//! Terminal styling and text rendering shared by the `galaxy-forge` binary.

pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
