//! Web server module
//!
//! Provides the search page and the HTTP API for ImgSearch-RS.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
