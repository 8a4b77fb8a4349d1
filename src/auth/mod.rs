//! HTTP Basic authentication and the role check that guards the cash card routes.

mod middleware;
mod principal;
mod user_directory;

pub use middleware::basic_auth_guard;
pub use principal::Principal;
pub use user_directory::{UserAccount, UserDirectory};

/// The role a user must hold to manage cash cards.
pub const CARD_OWNER_ROLE: &str = "CARD-OWNER";
