//! tran library — receiver application wiring.

pub mod app;
pub mod config;
pub mod demo;
pub mod errors;
