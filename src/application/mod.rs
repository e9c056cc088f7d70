// Application layer - Poll cycle use cases
pub mod dashboard_service;
pub mod reading_source;
pub mod refresh_scheduler;
pub mod visual_builder;
