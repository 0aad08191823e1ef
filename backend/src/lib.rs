//! Move advisor HTTP service
//!
//! Thin transport layer over `advisor_engine`: parse the posted piece
//! inventory, build the position, search it, and map the chosen move back
//! to client coordinates.

pub mod api;
