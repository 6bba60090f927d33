//! Quiz Site Actions
//!
//! Page scripts for the quiz site and its admin panel, compiled to WASM.
//! The server renders every page; this crate wires clicks and timers to the
//! site's AJAX views and patches the returned fragments into the page.

pub mod actions;
pub mod client;
pub mod config;
pub mod context;
pub mod countdown;
pub mod dispatcher;
pub mod dom;
pub mod endpoints;
pub mod error;
pub mod fragment;
pub mod modal;
pub mod models;
pub mod payload;
pub mod search;
pub mod title;

pub use dispatcher::start;
