//! Finance Client Storage
//!
//! On-device persistence for the client session.
//!
//! Two [`KeyValueStore`](fin_core::KeyValueStore) backends are provided:
//! - [`FileStore`]: one JSON file per key under a data directory
//! - [`MemoryStore`]: process-local map, for tests and ephemeral clients
//!
//! The [`session`] module reads and writes the serialized session record on
//! top of either backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use fin_core::{Session, UserRecord};
//! use fin_storage::{load_session, save_session, FileStore};
//! # async fn example() -> fin_core::Result<()> {
//! let store = FileStore::new("/var/lib/fin-client");
//! let session = Session::new(UserRecord::new("Ada", "ada@example.com", "admin"), "jwt");
//! save_session(&store, &session).await?;
//!
//! let restored = load_session(&store).await;
//! assert_eq!(restored, session);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod memory;
pub mod session;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::{clear_session, load_session, read_session, save_session, SESSION_KEY};
