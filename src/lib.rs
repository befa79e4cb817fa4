// ABOUTME: Root module for enroll - an MCP tool server for exam registration.
// ABOUTME: Re-exports all public types from submodules.

pub mod app;
pub mod config;
pub mod error;
pub mod mcp;
pub mod params;
pub mod prelude;
pub mod registration;
pub mod tool;
pub mod tools;

pub use config::Config;
pub use error::EnrollError;
