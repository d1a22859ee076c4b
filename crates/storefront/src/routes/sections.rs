//! Section navigation handler.

use axum::extract::{Path, State};
use axum::response::Redirect;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::routes::back_to_page;
use crate::state::AppState;

/// Show the section called `name`.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(name): Path<String>) -> Result<Redirect> {
    let redirect = state.with_shop(|shop| shop.show(&name).map(|()| back_to_page(shop)))??;
    add_breadcrumb("navigation", "Showed section", Some(&[("section", &name)]));
    Ok(redirect)
}
