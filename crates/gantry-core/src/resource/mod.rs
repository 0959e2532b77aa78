//! Resource records and list/upload types.
//!
//! This module defines the data shapes exchanged with the backend.
//! The operations themselves live on
//! [`ResourceGateway`](crate::ResourceGateway).

mod record;
mod types;

pub use record::ResourceRecord;
pub use types::{ListPage, UploadJob};
