//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the scanner to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool implementations and the stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{I18nScanMcpServer, run_server};
