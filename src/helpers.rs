use log::debug;

use crate::models::User;

pub fn log_all_users(users: &[User]) -> () {
    for user in users.iter() {
        debug!("Holding user {} ({} <{}>)", user.id, user.name, user.email);
    }
}

/// One roster line per user, newest first, for the tool's stdout output.
pub fn format_user(user: &User) -> String {
    format!("#{} {} <{}>", user.id, user.name, user.email)
}
