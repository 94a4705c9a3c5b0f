//! Query messages for the hardware API

pub mod goto;

pub use goto::GotoQuery;
