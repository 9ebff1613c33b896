//! Text utilities shared across modules

pub mod text;
