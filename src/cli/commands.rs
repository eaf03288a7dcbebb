//! CLI subcommand definitions
//!
//! Session commands at the top level, user and role management nested under
//! their own groups.

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session tokens
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Refresh the stored access token
    Refresh,
    /// Remove the stored session
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Show the navigation menu entries
    Menu,
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage roles
    Role {
        #[command(subcommand)]
        command: RoleCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// List users
    List {
        /// Skip the first N users
        #[arg(long, value_name = "N")]
        skip: Option<u32>,
        /// Return at most N users
        #[arg(long, value_name = "N")]
        limit: Option<u32>,
        /// Match against username, email, or full name
        #[arg(long)]
        search: Option<String>,
        /// Filter by active state
        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
        /// Filter by role name
        #[arg(long, value_name = "ROLE")]
        role: Option<String>,
    },
    /// Create a user
    Create {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Show one user
    Show { id: i64 },
    /// Update fields on a user
    Update {
        id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
        /// Replace the user's roles (comma-separated role ids)
        #[arg(long, value_delimiter = ',', value_name = "IDS")]
        role_ids: Option<Vec<i64>>,
    },
    /// Delete a user
    Delete { id: i64 },
    /// Reset a user's password to a generated one
    ResetPassword { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum RoleCommands {
    /// List roles
    List {
        #[arg(long, value_name = "N")]
        skip: Option<u32>,
        #[arg(long, value_name = "N")]
        limit: Option<u32>,
        /// Match against role name or description
        #[arg(long)]
        search: Option<String>,
        /// Filter by active state
        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },
    /// Create a role
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show one role
    Show { id: i64 },
    /// Update fields on a role
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },
    /// Delete a role (fails while users still hold it)
    Delete { id: i64 },
    /// Replace a user's role assignments
    Assign {
        user_id: i64,
        #[arg(long, value_delimiter = ',', value_name = "IDS", required = true)]
        role_ids: Vec<i64>,
    },
    /// List users holding a role
    Users {
        id: i64,
        #[arg(long, value_name = "N")]
        skip: Option<u32>,
        #[arg(long, value_name = "N")]
        limit: Option<u32>,
    },
}
