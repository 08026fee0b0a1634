//! Home page route handler.

use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::page::{self, PageTemplate};
use crate::state::AppState;

/// Display the portfolio page.
///
/// The page is assembled per request so the footer year follows the clock.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<PageTemplate> {
    let template = page::assemble(state.content(), page::current_year())?;
    Ok(template)
}
