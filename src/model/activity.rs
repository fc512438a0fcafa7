use serde::Serialize;

// ###################################
// ->   STRUCTS
// ###################################
/// A named extracurricular offering.
/// `participants` keeps insertion order, uniqueness is upheld by `ActivityStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

// ###################################
// ->   IMPLs
// ###################################
impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Activity {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder style helper used when seeding the directory.
    /// Duplicate emails are ignored.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.has_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Returns `false` if the email was already present.
    pub(super) fn add_participant(&mut self, email: &str) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.to_owned());
        true
    }

    /// Returns `false` if the email was not present.
    pub(super) fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}
