pub mod api;
pub mod codegen;
pub mod config;
pub mod links;
pub mod models;
pub mod redirect;
pub mod storage;
