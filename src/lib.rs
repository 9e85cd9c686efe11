pub mod admin;
pub mod auth;
pub mod config;
pub mod db;
pub mod export;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod pricing;

pub use db::create_pool;
