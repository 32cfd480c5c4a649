//! HTTP API layer.
//!
//! Translates HTTP requests into use case calls and formats responses.
//!
//! # Modules
//!
//! - [`graphql`] - GraphQL schema, resolvers and errors
//! - [`dto`] - Data Transfer Objects for the REST endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod routes;
