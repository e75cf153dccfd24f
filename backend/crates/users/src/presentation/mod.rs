//! Presentation Layer
//!
//! HTTP handlers, DTOs, router and API documentation.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod router;
