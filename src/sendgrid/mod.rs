pub mod client;

pub use client::{PreparedRequest, SendgridClient};
