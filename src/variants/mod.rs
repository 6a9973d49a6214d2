//! The closed set of concrete command variants.

pub mod version;
