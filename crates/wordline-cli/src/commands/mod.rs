//! CLI commands.

pub mod info;
pub mod lex;
pub mod render;
