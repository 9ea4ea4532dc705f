mod identity;
mod like;
mod preference;
mod profile;

pub use identity::IdentityRepository;
pub use like::LikeRepository;
pub use preference::PreferenceRepository;
pub use profile::ProfileRepository;

/// Everything the request handlers need from the external backend.
pub trait Repository:
    IdentityRepository
    + ProfileRepository
    + LikeRepository
    + PreferenceRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}
