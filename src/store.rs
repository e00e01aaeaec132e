use log::{error, info, warn};

use crate::directory::UserDirectory;
use crate::helpers::log_all_users;
use crate::models::{DraftCreate, DraftUpdate, User};

/// The owned local projection of the remote user collection. It is the only
/// writer to the list: every operation pairs one directory call with one
/// deterministic local mutation, applied on the success path only. Failures
/// are logged and swallowed, so callers observe them solely through the list
/// not changing.
///
/// Operations take `&mut self`, so local mutations are serialized by
/// ownership; each operation still suspends exactly once, at its network
/// call, and is neither retried nor cancelled.
#[derive(Debug, Default)]
pub struct UserListSynchronizer {
    users: Vec<User>,
    pub draft_create: DraftCreate,
    pub draft_update: DraftUpdate,
}

/// Parses a form-entered id string. Whitespace is tolerated; anything that is
/// not a whole non-negative integer is an explicit no-target, never a
/// sentinel that silently matches nothing.
fn parse_target_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

impl UserListSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest-first roster, as the rendering layer should display it.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Fetches the whole collection and replaces the local list with it,
    /// reversed so server append-order becomes newest-first. On failure the
    /// previous list (empty on a first load) stays in place.
    pub async fn load<D: UserDirectory>(&mut self, directory: &D) {
        match directory.list_users().await {
            Ok(mut users) => {
                users.reverse();
                self.users = users;
                info!("Loaded {} users from directory", self.users.len());
                log_all_users(&self.users);
            }
            Err(err) => error!("Error fetching users: {}", err),
        }
    }

    /// Submits the create draft. On success the server's returned user is
    /// prepended and the draft resets to empty; on failure both are left
    /// untouched so the form keeps its values.
    pub async fn create<D: UserDirectory>(&mut self, directory: &D) {
        let draft = self.draft_create.clone();
        match directory.create_user(&draft).await {
            Ok(user) => {
                self.users.insert(0, user);
                self.draft_create = DraftCreate::default();
            }
            Err(err) => error!("Error creating user: {}", err),
        }
    }

    /// Submits the update draft. The target id is validated before anything
    /// is sent: an unparseable id performs no network call at all. On success
    /// the one matching entry takes the draft's name and email (its id and
    /// every other entry are untouched) and the draft resets; a valid id with
    /// no matching entry mutates nothing locally.
    pub async fn update<D: UserDirectory>(&mut self, directory: &D) {
        let draft = self.draft_update.clone();
        let Some(target_id) = parse_target_id(&draft.id) else {
            warn!("Ignoring update: {:?} is not a valid user id", draft.id);
            return;
        };
        match directory.update_user(target_id, &draft.name, &draft.email).await {
            Ok(()) => {
                for user in self.users.iter_mut() {
                    if user.id == target_id {
                        user.name = draft.name.clone();
                        user.email = draft.email.clone();
                    }
                }
                self.draft_update = DraftUpdate::default();
            }
            Err(err) => error!("Error updating user: {}", err),
        }
    }

    /// Deletes by id. Ids are unique, so at most one entry is filtered out;
    /// deleting an id the list does not hold leaves it as-is.
    pub async fn remove<D: UserDirectory>(&mut self, directory: &D, user_id: u32) {
        match directory.delete_user(user_id).await {
            Ok(()) => self.users.retain(|user| user.id != user_id),
            Err(err) => error!("Error deleting user: {}", err),
        }
    }
}
