//! Server-push notification relay.
//!
//! One broadcast hub per process; SSE clients subscribe through
//! `/api/notifications/stream` and receive everything addressed to them plus
//! all broadcasts. Delivery is best-effort: a slow client that lags past the
//! channel capacity loses the missed events and keeps receiving new ones.

pub mod hub;
pub mod model;
pub mod routes;

pub use hub::NotificationHub;
pub use model::{Notification, NotificationKind};
pub use routes::{NotifyRouteState, notify_routes};
