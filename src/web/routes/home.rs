use axum::response::Redirect;

/// The front-end lives in the static directory.
pub async fn home() -> Redirect {
    Redirect::temporary("/static/index.html")
}
