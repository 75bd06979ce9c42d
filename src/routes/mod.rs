//! HTTP route modules for the sample application.
//!
//! - `sample`: the `/sample` routes (config lookup, parameter echoes,
//!   database and foobar queries, admin-only route)

pub mod sample;
