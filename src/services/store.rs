use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::UserPreferences;

/// In-memory keyed store for user preference profiles.
///
/// Injected into the HTTP layer as an explicit collaborator; the scoring core
/// never touches it. Lifecycle is owned by the hosting process, so contents
/// do not survive a restart.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    entries: RwLock<HashMap<String, UserPreferences>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored profile by user id
    pub async fn get(&self, user_id: &str) -> Option<UserPreferences> {
        self.entries.read().await.get(user_id).cloned()
    }

    /// Insert or replace a profile, returning the previous one if any
    pub async fn put(&self, preferences: UserPreferences) -> Option<UserPreferences> {
        self.entries
            .write()
            .await
            .insert(preferences.user_id.clone(), preferences)
    }

    /// Remove a profile by user id
    pub async fn remove(&self, user_id: &str) -> Option<UserPreferences> {
        self.entries.write().await.remove(user_id)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn preferences(user_id: &str) -> UserPreferences {
        UserPreferences {
            user_id: user_id.to_string(),
            location: Location {
                latitude: 40.7,
                longitude: -74.0,
                address: None,
                city: None,
                state: None,
                postal_code: None,
            },
            budget: BudgetRange {
                min: 10000.0,
                max: 25000.0,
            },
            priorities: Priorities::default(),
            lifestyle: LifestyleProfile {
                age_group: AgeGroup::Young,
                activity_level: ActivityLevel::Medium,
                social_preference: SocialPreference::Balanced,
                work_style: WorkStyle::Remote,
            },
            must_haves: vec![],
            deal_breakers: vec![],
        }
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = PreferenceStore::new();
        assert!(store.get("alice").await.is_none());

        store.put(preferences("alice")).await;
        let fetched = store.get("alice").await.unwrap();
        assert_eq!(fetched.user_id, "alice");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let store = PreferenceStore::new();
        store.put(preferences("bob")).await;

        let mut updated = preferences("bob");
        updated.budget.max = 40000.0;
        let previous = store.put(updated).await.unwrap();

        assert_eq!(previous.budget.max, 25000.0);
        assert_eq!(store.get("bob").await.unwrap().budget.max, 40000.0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = PreferenceStore::new();
        store.put(preferences("carol")).await;

        assert!(store.remove("carol").await.is_some());
        assert!(store.get("carol").await.is_none());
        assert!(store.is_empty().await);
    }
}
