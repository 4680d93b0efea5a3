//! Document store client for LeoConnect.
//!
//! [`DocumentStore`] is the seam the seeder writes through. Two implementations ship:
//! [`FirestoreClient`] speaks the Firestore REST v1 API (service-account auth or the
//! local emulator), and [`MemoryStore`] keeps everything in process.

pub mod auth;
pub mod credentials;
pub mod errors;
pub mod firestore;
pub mod memory;
pub mod store;
pub mod value;

pub use credentials::ServiceAccountKey;
pub use errors::StoreError;
pub use firestore::FirestoreClient;
pub use memory::MemoryStore;
pub use store::DocumentStore;
pub use value::{Document, Fields, Value, to_fields};
