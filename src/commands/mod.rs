//! Command implementations for mdp

pub mod dispatch;
pub mod format;
pub mod issue;
pub mod milestone;
pub mod project;
pub mod search;
