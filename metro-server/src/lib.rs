//! Metro planner server.
//!
//! A web service that answers: "What is the fastest way from this station
//! to that one, and which museum can I reach soonest from here?"

pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod places;
pub mod planner;
pub mod web;
