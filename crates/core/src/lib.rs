//! Core domain logic for the todolist service.
//!
//! Pure types and functions with no I/O: the list record, the request
//! payloads that create or patch it, and the repository seam the server
//! crate implements against a relational store.

pub mod list;
pub mod serde;
pub mod storage;
