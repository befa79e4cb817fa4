// ABOUTME: Params module - turns a loosely-typed tool argument bag into a
// ABOUTME: strictly typed registration record (unwrap, default, validate).

mod defaults;
mod extract;
mod schema;
mod validate;

pub use defaults::*;
pub use extract::*;
pub use schema::*;
pub use validate::*;

#[cfg(test)]
mod validate_test;
