pub mod payments_service;
pub mod render_service;
