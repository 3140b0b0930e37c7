pub mod accept;
pub mod api;
pub mod auth;
pub mod router;
pub mod state;
