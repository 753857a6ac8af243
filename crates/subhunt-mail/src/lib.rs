//! Mail layer: the search/fetch seam, its Gmail and fixture implementations,
//! and the scan orchestrator that drives the core classifier over them.

mod error;
pub use error::ServiceError;

pub mod cache;
pub mod fixture;
pub mod scan;
pub mod service;

#[cfg(feature = "gmail")]
pub mod gmail;

pub use cache::{CacheKey, MemoryCache, ScanCache};
pub use fixture::JsonMailbox;
pub use scan::Scanner;
pub use service::MailService;

#[cfg(feature = "gmail")]
pub use gmail::GmailClient;
