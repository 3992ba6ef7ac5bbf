pub mod aggregate;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod results;
pub mod service;
pub mod viewer;
