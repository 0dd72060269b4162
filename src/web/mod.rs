pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;
use tera::Tera;

use crate::model::Assistant;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub assistant: Arc<Assistant>,
}
