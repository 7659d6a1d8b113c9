//! Request input parsing and validation helpers.

pub mod parse;
