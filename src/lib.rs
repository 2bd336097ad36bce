//! In-memory ledger service.
//!
//! Accounts live in a concurrent store and are mutated only by the transfer
//! protocol in [`engine`], which acquires the two per-account locks in a
//! fixed identifier order so opposing transfers can never deadlock.

pub mod config;
pub mod domain;
pub mod engine;
pub mod http;
pub mod notify;
pub mod prelude;
pub mod service;
pub mod storage;
