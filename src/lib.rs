pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use services::BookingService;
use store::TheatreStore;

// Shared state для всего приложения
pub struct AppState {
    pub store: Arc<dyn TheatreStore>,
    pub booking: BookingService,
}

impl AppState {
    pub fn new(store: Arc<dyn TheatreStore>) -> Arc<Self> {
        let booking = BookingService::new(store.clone());
        Arc::new(Self { store, booking })
    }
}
