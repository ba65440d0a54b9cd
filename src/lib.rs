#![doc = "The `tasklist` library crate."]
#![doc = ""]
#![doc = "This crate contains the account and task-tracking core: domain models,"]
#![doc = "password hashing and token issuance, the auth guard protecting task routes,"]
#![doc = "the pagination engine, the store adapters, and the HTTP route handlers."]
#![doc = "The binary (`main.rs`) wires these together against Postgres."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod store;
