use crate::places::PlaceDirectory;
use crate::repository::Repository;

/// Shared per-request context. Either external capability may be absent when
/// its credentials were missing at startup; handlers that need it answer with
/// a configuration error instead of the process refusing to boot.
#[derive(Clone)]
pub struct AppState<R: Repository, P: PlaceDirectory> {
    pub repository: Option<R>,
    pub places: Option<P>,
}
