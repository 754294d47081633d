//! Business logic between the command layer and the repositories.

pub mod access;
