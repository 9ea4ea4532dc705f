use crate::client::storage::KeyValueStore;

/// Marker recording that the legacy keys were already cleared. Read before
/// any mutation, so repeat invocations are complete no-ops.
pub const CLEARED_MARKER: &str = "coffeeconnect_localstorage_cleared";

/// Keys from the pre-backend era of the app, superseded by server state.
pub const LEGACY_KEYS: [&str; 5] = [
    "visits",
    "favorites",
    "coffeeShops",
    "userPreferences",
    "coffeeConnectState",
];

/// Session-scoped marker gating the one-time cleanup notification.
pub const NOTICE_MARKER: &str = "coffeeconnect_cleanup_notice_shown";

/// Removes the legacy locally-cached keys, once. Returns whether this call
/// actually performed the cleanup.
pub fn clear_legacy_state(store: &mut impl KeyValueStore) -> bool {
    if store.get(CLEARED_MARKER).is_some() {
        return false;
    }

    for key in LEGACY_KEYS {
        store.remove(key);
    }
    store.set(CLEARED_MARKER, "true");

    true
}

/// One notification per session: true on the first call, false afterwards.
pub fn should_show_cleanup_notice(session: &mut impl KeyValueStore) -> bool {
    if session.get(NOTICE_MARKER).is_some() {
        return false;
    }

    session.set(NOTICE_MARKER, "true");
    true
}
