use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Activity;

pub type SharedRegistry = Arc<ActivityRegistry>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl RegistryError {
    pub fn status(&self) -> http::StatusCode {
        match self {
            RegistryError::ActivityNotFound => http::StatusCode::NOT_FOUND,
            RegistryError::AlreadySignedUp | RegistryError::NotRegistered => {
                http::StatusCode::BAD_REQUEST
            }
        }
    }
}

/// In-memory store of activities keyed by name. Seeded once at startup and
/// mutated only through [`signup`](ActivityRegistry::signup) and
/// [`unregister`](ActivityRegistry::unregister).
pub struct ActivityRegistry {
    inner: Mutex<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(catalog: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Mutex::new(catalog),
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Full mapping of activity name to record, unfiltered.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.lock().unwrap().clone()
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.inner.lock().unwrap();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.inner.lock().unwrap();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The school's published activity catalog, including current signups.
fn default_catalog() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_string(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}
