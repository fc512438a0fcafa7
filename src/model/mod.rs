//! The activity directory.
//!
//! `ActivityStore` owns the only copy of the table. It lives inside `AppState`
//! and every handler reaches it through there, tests build their own.

mod activity;
mod seed;

pub use activity::Activity;
pub use seed::seed_activities;

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::info;

// ###################################
// ->   STRUCTS
// ###################################
/// Activity name -> `Activity`. The key set never changes after construction.
pub type Directory = BTreeMap<String, Activity>;

#[derive(Debug)]
pub struct ActivityStore {
    activities: RwLock<Directory>,
}

// ###################################
// ->   IMPLs
// ###################################
impl ActivityStore {
    /// Builds a store from the given activities.
    /// If two activities share a name the later one wins.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let activities = activities
            .into_iter()
            .map(|activity| (activity.name.clone(), activity))
            .collect::<Directory>();

        Self {
            activities: RwLock::new(activities),
        }
    }

    /// A store holding the default seed set.
    pub fn seeded() -> Self {
        let store = Self::new(seed_activities());
        info!("{:<12} - Seeded the activity directory", "ActivityStore");
        store
    }

    /// A snapshot of the whole directory.
    pub async fn list_activities(&self) -> Directory {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.read().await.get(activity_name).cloned()
    }

    #[allow(clippy::len_without_is_empty)]
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Adds `email` to the participants of `activity_name`.
    /// Capacity (`max_participants`) is not enforced.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| Error::ActivityNotFound(activity_name.to_string()))?;

        if !activity.add_participant(email) {
            return Err(Error::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Removes `email` from the participants of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| Error::ActivityNotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(Error::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },
}
