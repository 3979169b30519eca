use crate::core::error::StoreError;
use crate::models::complaint::{Complaint, NewComplaint};
use crate::models::user::{NewUser, User};
use crate::utils::auth::AdminGrant;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory store for users and complaints.
///
/// Both tables sit behind a single mutex. Handlers take the guard once per
/// request and keep it until the response is encoded, so no request ever
/// sees a user record and the complaint table out of step.
#[derive(Debug, Default)]
pub struct ComplaintStore {
    tables: Mutex<Tables>,
}

impl ComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to both tables.
    ///
    /// Every operation finishes its mutation before any step that can fail,
    /// so a guard poisoned by a panicking holder still holds consistent
    /// tables and is recovered rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The Users and Complaints tables.
#[derive(Debug, Default)]
pub struct Tables {
    /// Keyed by secret code
    users: HashMap<String, User>,
    /// Canonical complaints, keyed by ID
    complaints: HashMap<String, Complaint>,
}

impl Tables {
    /// IDs for both tables come from the number of complaints stored so far.
    /// A user and a complaint can therefore share an ID.
    fn next_id(&self) -> String {
        (self.complaints.len() + 1).to_string()
    }

    pub fn register(&mut self, new_user: NewUser) -> Result<&User, StoreError> {
        if self.users.contains_key(&new_user.secret_code) {
            return Err(StoreError::DuplicateSecretCode);
        }

        let user = User::new(self.next_id(), new_user);
        let key = user.secret_code.clone();

        Ok(&*self.users.entry(key).or_insert(user))
    }

    pub fn user(&self, secret_code: &str) -> Option<&User> {
        self.users.get(secret_code)
    }

    /// Canonical complaint, without checking that its owner still exists.
    pub fn complaint(&self, id: &str) -> Option<&Complaint> {
        self.complaints.get(id)
    }

    /// Full stored record for `secret_code`, secret code included.
    pub fn login(&self, secret_code: &str) -> Result<&User, StoreError> {
        self.user(secret_code).ok_or(StoreError::UserNotFound)
    }

    /// Store a complaint and append a copy to its owner's record.
    ///
    /// Returns the new complaint's ID. Nothing is stored if the owner is
    /// unknown.
    pub fn submit_complaint(&mut self, new_complaint: NewComplaint) -> Result<String, StoreError> {
        let id = self.next_id();

        let owner = self
            .users
            .get_mut(&new_complaint.secret_code)
            .ok_or(StoreError::UserNotFound)?;

        let complaint = Complaint {
            id: id.clone(),
            title: new_complaint.title,
            summary: new_complaint.summary,
            severity: new_complaint.severity,
            resolved: false,
            secret_code: new_complaint.secret_code,
        };

        owner.complaints.push(complaint.clone());
        self.complaints.insert(id.clone(), complaint);

        Ok(id)
    }

    /// The copies embedded in the user's record. These keep the state the
    /// complaint had when submitted.
    pub fn complaints_for_user(&self, secret_code: &str) -> Result<&[Complaint], StoreError> {
        self.login(secret_code).map(|user| user.complaints.as_slice())
    }

    /// Every user's embedded complaints, concatenated in map order.
    pub fn all_complaints(&self, _grant: &AdminGrant) -> Vec<&Complaint> {
        self.users
            .values()
            .flat_map(|user| user.complaints.iter())
            .collect()
    }

    pub fn view_complaint(&self, id: &str) -> Result<&Complaint, StoreError> {
        let complaint = self.complaint(id).ok_or(StoreError::ComplaintNotFound)?;

        if self.user(&complaint.secret_code).is_none() {
            return Err(StoreError::UserNotFound);
        }

        Ok(complaint)
    }

    /// Mark the canonical complaint resolved. The owner's embedded copy is
    /// left as it was.
    pub fn resolve_complaint(&mut self, _grant: &AdminGrant, id: &str) -> Result<(), StoreError> {
        let complaint = self
            .complaints
            .get_mut(id)
            .ok_or(StoreError::ComplaintNotFound)?;

        complaint.resolved = true;
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn complaint_count(&self) -> usize {
        self.complaints.len()
    }
}
