//! cardiorisk-core
//!
//! Pure domain types for the cardiovascular risk form: patient answers,
//! coded vocabularies, and score records. No computation beyond input
//! validation. This is the shared wire vocabulary of the system.

pub mod codes;
pub mod error;
pub mod measure;
pub mod models;
