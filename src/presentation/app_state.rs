// Application state for HTTP handlers
use crate::presentation::shell::ShellView;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub views: watch::Receiver<ShellView>,
}
