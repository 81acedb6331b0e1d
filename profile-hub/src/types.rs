//! Types passed between the client workflows and the hosted services.

pub mod avatar;
pub mod profile;
pub mod session;

pub use avatar::{AvatarImage, AvatarPath};
pub use profile::{Profile, ProfileFields};
pub use session::{AuthTokens, Email, Session, UserId};
