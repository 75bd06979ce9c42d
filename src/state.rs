//! Shared application state handed to every route as an `Extension`.

use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::db::DatabaseService;
use crate::guard::AccessGuard;
use crate::services::foobar::FoobarService;

/// Collaborators the sample routes depend on, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<dyn ConfigProvider>,
    pub db: Arc<dyn DatabaseService>,
    pub foobars: Arc<dyn FoobarService>,
    pub guard: Arc<dyn AccessGuard>,
}
