//! gantry-core - Core types and traits for the gantry admin API toolkit.

pub mod credentials;
pub mod error;
pub mod query;
pub mod registry;
pub mod resource;
pub mod session;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use query::{Page, ResourceQuery, Sort, SortOrder};
pub use registry::{Capabilities, Registry, ResourceDef};
pub use resource::{ListPage, ResourceRecord, UploadJob};
pub use session::{Session, SessionToken};
pub use traits::{ResourceGateway, SessionStore};
pub use types::{ApiUrl, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
