//! Client-side application state for the Putnik travel guide.
//!
//! The crate owns the [`Session`]: one explicit state object shared by
//! every view, holding favourites, interests, the route draft, user
//! routes, authentication and the profile. Local persistence goes
//! through the [`Vault`] key-value abstraction; remote favourite sync
//! and vault writes run as detached best-effort tasks that may fail
//! silently by design.

#![forbid(unsafe_code)]

pub mod browse;
pub mod scope;
pub mod session;
pub mod sync;
pub mod vault;

pub use browse::{AttractionFilter, MapPin, filter_attractions, map_pins};
pub use scope::ViewScope;
pub use session::{AuthState, Profile, ProfilePatch, Session};
pub use sync::spawn_detached;
pub use vault::{MemoryVault, Vault, VaultError, keys};
