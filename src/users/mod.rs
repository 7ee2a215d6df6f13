//! User domain: the snapshot model and the storage seam it is loaded through.

pub mod model;
pub mod routes;
pub mod store;

pub use model::{DocumentsStatus, Role, User, VerificationStatus};
pub use routes::{UserRouteState, user_routes};
pub use store::{InMemoryUserStore, UserStore};
