//! Application layer orchestrating the client against its configured backend.
//!
//! This module defines the `CustomerSourceClient`, which decides whether an
//! operation is served from in-memory state or delegated to the merchant
//! gateway, and the `ClientRegistry` that hands out shared client instances.

pub mod client;
pub mod registry;
