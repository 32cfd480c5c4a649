//! GraphQL API built with async-graphql.
//!
//! ```graphql
//! type Query {
//!   url(alias: String!, expireAfter: DateTime): URL
//!   viewer: User
//! }
//! type Mutation {
//!   createURL(url: URLInput!, isPublic: Boolean!): URL
//!   modifyURL(oldAlias: String!, newAlias: String!): URL
//! }
//! ```
//!
//! The use cases are registered as schema data. The authenticated [`User`],
//! when there is one, is attached to each request by
//! [`crate::api::handlers::graphql`]; mutations without it fail with
//! `extensions.code = "Unauthorized"`.
//!
//! [`User`]: crate::domain::entities::User

pub mod error;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::application::services::{UrlCreator, UrlModifier, UrlRetriever};

pub use error::ApiError;
pub use mutation::Mutation;
pub use query::Query;

pub type ShortSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the schema over the given use cases.
pub fn build_schema(
    url_creator: Arc<dyn UrlCreator>,
    url_modifier: Arc<dyn UrlModifier>,
    url_retriever: Arc<dyn UrlRetriever>,
) -> ShortSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(url_creator)
        .data(url_modifier)
        .data(url_retriever)
        .finish()
}
