//! capabilities shared by resources and complex attributes
use crate::reference::{AttributePath, Reference};
use crate::token::Token;

/// Anything that can name the reference of one of its own attributes
///
/// Complex attributes implement this by extending `path` and handing it to their own parent, never by deriving the
/// full path themselves.
pub trait InterpolatingParent: std::fmt::Debug {
    fn interpolation_for_attribute(&self, path: AttributePath) -> Reference;
}

/// Anything that has a fully-qualified reference of its own
pub trait Addressable {
    /// Stable for identical inputs, calling it twice renders the same text
    fn fqn(&self) -> Token;
}
