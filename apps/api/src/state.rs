use crate::generation::service::BrandKitService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub service: BrandKitService,
}
