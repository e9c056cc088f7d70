// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::page::DASHBOARD_HTML;
use axum::{
    extract::State,
    response::{
        Html,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

/// Dashboard page
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Push the current view, then every replacement, to the page. The stream
/// ends when the shell shuts down.
pub async fn dashboard_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = WatchStream::new(state.views.clone())
        .map(|view| Event::default().event("frame").json_data(&view));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
