//! Ada Assistente — desktop client for the AgiFinance retrieval-augmented
//! assistant service.
//!
//! The client keeps one realtime connection per launch, renders the
//! conversation transcript, and (in development mode) exposes the service's
//! document listing and upload endpoints.

pub mod documents;
pub mod env;
pub mod session;
pub mod storage;
pub mod theme;
pub mod transcript;
pub mod types;
#[cfg(any(feature = "desktop", feature = "web"))]
pub mod ui;
#[cfg(any(feature = "desktop", feature = "web"))]
pub mod views;
