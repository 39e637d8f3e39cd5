//! End-to-end tests.
//!
//! These drive the view services and the HTTP router against the in-memory
//! repository adapter, covering the full path a request takes: controller →
//! service → repository port → converter → envelope.

mod catalog_flow_tests;
mod glossary_flow_tests;
mod http_tests;

use std::sync::Arc;

use crate::app::App;
use crate::infrastructure::{ClockPort, InMemoryRepository, SystemClock};

pub const SERVER_NAME: &str = "active-metadata-store";
pub const USER: &str = "erinoverview";
pub const DENIED_USER: &str = "nosybystander";

/// An App wired to a fresh in-memory repository with one denied caller.
pub fn test_app() -> Arc<App> {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let repository = Arc::new(
        InMemoryRepository::new(clock.clone())
            .with_denied_users(vec![DENIED_USER.to_string()]),
    );
    Arc::new(App::new(SERVER_NAME, repository, clock))
}
