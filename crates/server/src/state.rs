use happycat_catalog::CatalogService;

pub struct AppState {
    pub service: CatalogService,
    /// Bearer token guarding the write routes. Empty means writes are
    /// disabled outright, never open.
    pub admin_token: String,
}

impl AppState {
    pub fn new(service: CatalogService, admin_token: String) -> Self {
        Self {
            service,
            admin_token,
        }
    }
}
