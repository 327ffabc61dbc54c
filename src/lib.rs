//! Business advisor crew: fans a business challenge out to several LLM-backed
//! advisors and returns their advice with parsed scores.

pub mod advisors;
pub mod agents;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod llm;
pub mod normalizer;
pub mod server;
pub mod tasks;
pub mod types;
