//! Model Context Protocol server exposing the tool registry over stdio.

pub mod protocol;
pub mod server;

pub use server::McpServer;
