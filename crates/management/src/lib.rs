//! OmniCreator hub backend: record repositories, session context, page
//! store and the REST API that feeds the dashboard pages.
//!
//! Records live behind [`repository::Repository`]; the in-memory backend is
//! what the server runs with today.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod seed;
pub mod session;
pub mod store;

pub use handlers::HubState;
pub use repository::{InMemoryRepository, ListQuery, Mutation, Repository};
pub use router::hub_router;
pub use session::{AuthProvider, AuthState, LocalAuthProvider, SessionContext, Subscription};
pub use store::{HubStore, Repositories};
