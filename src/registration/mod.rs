// ABOUTME: Registration module - payload assembly, the registration service
// ABOUTME: client, result formatting and the register_user tool.

mod client;
mod format;
mod payload;
mod register_user;

pub use client::*;
pub use format::*;
pub use payload::*;
pub use register_user::*;

#[cfg(test)]
mod register_user_test;
