//! OSRM-backed implementation of the GoSafe routing provider contract.

pub mod client;

pub use client::OsrmClient;
