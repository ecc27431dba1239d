//! Profile queries

use common::models::Profile;

use crate::Store;

/// Get profile by ID
pub async fn get(store: &Store, id: &str) -> Option<Profile> {
    store.round_trip().await;
    store.inner.profiles.read().await.get(id).cloned()
}

/// Create or overwrite a profile built from whatever is currently stored
///
/// `build` receives the existing record (if any) and returns the record to
/// store. Runs under one write lock.
pub async fn upsert<F>(store: &Store, id: &str, build: F) -> Profile
where
    F: FnOnce(Option<&Profile>) -> Profile,
{
    store.round_trip().await;
    let mut profiles = store.inner.profiles.write().await;
    let profile = build(profiles.get(id));
    profiles.insert(id.to_string(), profile.clone());
    profile
}

/// Apply `f` to an existing profile under one write lock
///
/// Returns `None` without touching the collection when the id is unknown.
pub async fn modify<F, T>(store: &Store, id: &str, f: F) -> Option<(Profile, T)>
where
    F: FnOnce(&mut Profile) -> T,
{
    store.round_trip().await;
    let mut profiles = store.inner.profiles.write().await;
    let profile = profiles.get_mut(id)?;
    let out = f(profile);
    Some((profile.clone(), out))
}

/// Number of stored profiles
pub async fn count(store: &Store) -> usize {
    store.inner.profiles.read().await.len()
}
