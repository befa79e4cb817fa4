// ABOUTME: Tool module - defines tools, registry, and results.
// ABOUTME: Core abstraction for remotely invokable operations.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod result_test;
