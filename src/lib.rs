//! SunuTech Agent - Intent-routed customer support and sales assistant
//!
//! This crate classifies each customer message into an intent, routes it to
//! a handler that may consult product documentation or the inventory store,
//! and answers with text plus an execution trace.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
