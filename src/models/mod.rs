//! Request and Response models for the command shell
//!
//! This module defines the DTOs (Data Transfer Objects) exchanged as JSON
//! lines between the shell and its caller.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Command;
pub use responses::{
    AddResponse, ContainsResponse, CountResponse, ErrorResponse, KeysResponse, LookupResponse,
    OldestResponse, PurgeResponse, RemoveResponse, Response, StatsResponse,
};
