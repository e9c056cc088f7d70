// Domain layer - Readings, series and dashboard frames
pub mod dashboard;
pub mod reading;
pub mod series;
