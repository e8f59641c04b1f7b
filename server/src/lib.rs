//! Backend library surface.
//!
//! Router assembly lives in [`routes`]; exposed as a library so integration
//! tests can run the full router against a real listener.

pub mod routes;
