//! API wire types.

mod label;

pub use label::GhLabel;
