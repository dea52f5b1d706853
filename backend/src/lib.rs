//! # Person API
//!
//! A small CRUD service for a single `Person` entity: create, list and
//! get-by-id over HTTP, backed by Postgres through Diesel or by an in-memory
//! store for tests and local development.
//!
//! ## Architecture
//!
//! - [`api`]: wire types for the HTTP API
//! - [`models`]: the stored `Person` entity
//! - [`services`]: validation rules applied before persistence
//! - [`db`]: repository trait, implementations and the service layer
//! - [`http`]: axum router, handlers and problem-details errors

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
