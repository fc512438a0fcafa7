use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::info;

use crate::{
    model::Directory,
    web::{
        data::{EmailQuery, MessageResponse},
        Error, Result,
    },
    AppState,
};

#[tracing::instrument(name = "Listing activities", skip(app_state))]
pub async fn list_activities(State(app_state): State<AppState>) -> Json<Directory> {
    Json(app_state.activity_store.list_activities().await)
}

#[tracing::instrument(
    name = "Signing up for an activity",
    skip(app_state, query)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = email_from_query(query)?;

    let message = app_state
        .activity_store
        .signup(&activity_name, &email)
        .await?;
    info!("{message}");

    Ok(Json(message.into()))
}

#[tracing::instrument(
    name = "Unregistering from an activity",
    skip(app_state, query)
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = email_from_query(query)?;

    let message = app_state
        .activity_store
        .unregister(&activity_name, &email)
        .await?;
    info!("{message}");

    Ok(Json(message.into()))
}

// ###################################
// ->   HELPERS
// ###################################
fn email_from_query(
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<String> {
    let Query(query) = query.map_err(|rej| Error::QueryRejected(rej.body_text()))?;
    query.into_email()
}
