pub mod catalog;
pub mod stats;
pub(crate) mod validation;
