//! External service adapters

pub mod llm;
