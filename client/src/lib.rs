//! Home page client for the starter backend.
//!
//! Fetches the two status endpoints and folds the joint outcome into a
//! loading state machine whose text rendering is the page content.

pub mod net;
pub mod page;
