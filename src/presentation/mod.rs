// Presentation layer - Dashboard page and its update stream
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod shell;
