//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Html,
};
use std::convert::Infallible;

use crate::domain::entities::User;
use crate::state::AppState;

/// User resolved by [`crate::api::middleware::auth`], if any.
pub struct Viewer(pub Option<User>);

impl<S: Send + Sync> FromRequestParts<S> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(parts.extensions.get::<User>().cloned()))
    }
}

/// Executes a GraphQL request.
///
/// # Endpoint
///
/// `POST /graphql`
///
/// The authenticated user, when present, is attached as request data so
/// resolvers can read it.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Viewer(user): Viewer,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(user) = user {
        request = request.data(user);
    }

    state.schema.execute(request).await.into()
}

/// Serves the GraphiQL IDE.
///
/// # Endpoint
///
/// `GET /graphql`
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
