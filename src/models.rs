use std::path::PathBuf;

use clap::{command, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// A model for a single directory entry as the server returns it.
/// Consists of:
/// 1. Server-assigned numeric id, unique and immutable after creation
/// 2. User's display name, accepted as-is with no format constraint
/// 3. User's email address, accepted as-is with no format constraint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Staging buffer for a not-yet-submitted create form.
/// Serializes exactly to the `POST /users` request body, so empty fields
/// are sent as empty strings rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DraftCreate {
    pub name: String,
    pub email: String,
}

/// Staging buffer for a not-yet-submitted update form.
/// The target id is kept in string form as entered; it is validated only
/// when the update is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the directory endpoint configuration.
/// 2. The directory operation to perform after the initial load.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

/// The directory operation the tool performs once the roster is loaded.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current roster and exit
    List,
    /// Create a new user and print the roster with it prepended
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Replace the name and email of an existing user
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a user by id
    Delete {
        #[arg(long)]
        id: u32,
    },
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base address of the user directory service, overridable via the
///    `USERS_API_BASE_URL` environment variable
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:4000".to_string()
}
