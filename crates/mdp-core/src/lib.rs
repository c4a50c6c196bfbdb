//! mdp Core Library
//!
//! Core domain logic for the mdp markdown project tracker: entity reading,
//! computed fields, list filtering, configuration, and the BM25 search
//! engine behind `mdp search`.

pub mod config;
pub mod entity;
pub mod error;
pub mod format;
pub mod logging;
pub mod query;
pub mod search;
pub mod store;
pub mod table;
pub mod text;
