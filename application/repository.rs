mod base;
mod supabase;

pub use base::{
    IdentityRepository, LikeRepository, PreferenceRepository, ProfileRepository, Repository,
};
pub use supabase::SupabaseRepository;
