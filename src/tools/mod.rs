// ABOUTME: Built-in tools served alongside register_user.
// ABOUTME: Currently just arithmetic.

mod add;

pub use add::AddTool;
