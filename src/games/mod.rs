//! Game implementations.

pub mod baseball;
