pub mod client;

pub use client::{AssistClient, MISSING_KEY_REPLY, SYSTEM_INSTRUCTION, UNAVAILABLE_REPLY};
