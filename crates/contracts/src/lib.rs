//! Types and logic shared by the admin console frontend and the API server.
//!
//! Everything here is platform-neutral: no I/O, no browser APIs, no async runtime.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
