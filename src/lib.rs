//! sendgrid-tools: SendGrid v3 REST endpoints exposed as named tools.
//!
//! Every endpoint is a static descriptor in [`tools::catalog`]; the
//! [`tools::Dispatcher`] validates arguments, renders the request and
//! forwards it through [`sendgrid::SendgridClient`]. The [`mcp`] module
//! serves the resulting registry to MCP clients over stdio.

pub mod config;
pub mod error;
pub mod mcp;
pub mod sendgrid;
pub mod setup;
pub mod tools;
pub mod types;
