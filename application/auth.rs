mod extract;
mod middleware;

pub use extract::{CurrentUser, MaybeUser};
pub use middleware::session_resolver;
