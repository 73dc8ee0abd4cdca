//! Client library shared by the PilgrimPath CLI binaries.

pub mod client;

pub use client::PilgrimClient;
