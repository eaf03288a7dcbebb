use chrono::Local;

use crate::api::types::{
    RoleCreate, RoleListParams, RoleUpdate, UserCreate, UserListParams, UserRoleAssign, UserUpdate,
};
use crate::api::{ApiClient, Session};
use crate::cli::{Cli, Commands, RoleCommands, UserCommands};
use crate::error::AppError;
use crate::output::{
    TableOptions, print_json, print_list_summary, print_menu_table, print_role_table,
    print_role_user_table, print_user_table,
};
use crate::utils::Timezone;
use crate::utils::time;
use crate::{api, menu};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let opts = TableOptions {
        use_color: cli.use_color(),
        relative: cli.relative,
        timezone,
    };

    match &cli.command {
        Commands::Login { username, password } => login(cli, username, password),
        Commands::Refresh => refresh(cli),
        Commands::Logout => logout(),
        Commands::Whoami => whoami(cli, &opts),
        Commands::Menu => {
            show_menu(cli);
            Ok(())
        }
        Commands::User { command } => user_command(cli, command, &opts),
        Commands::Role { command } => role_command(cli, command, &opts),
    }
}

fn anonymous_client(cli: &Cli) -> ApiClient {
    ApiClient::new(cli.server_url())
}

/// Client carrying the stored access token; authenticated commands refuse
/// to run without a session.
fn client(cli: &Cli) -> Result<ApiClient, AppError> {
    let session = Session::load().ok_or(AppError::NotLoggedIn)?;
    Ok(anonymous_client(cli).with_token(Some(session.access_token)))
}

fn store_session(data: &api::types::AuthData) {
    Session {
        username: data.username.clone(),
        roles: data.roles.clone(),
        access_token: data.access_token.clone(),
        refresh_token: data.refresh_token.clone(),
        expires: data.expires.clone(),
    }
    .save();
}

fn print_expiry(expires: &str) {
    // Short-lived tokens usually expire the same day; drop the date then.
    let line = time::parse_timestamp(expires)
        .and_then(|dt| {
            if dt.date_naive() == Local::now().date_naive() {
                time::format_time(dt)
            } else {
                time::format_date_time_default(dt)
            }
        })
        .unwrap_or_else(|_| expires.to_string());
    println!("Access token expires {line}");
}

fn login(cli: &Cli, username: &str, password: &str) -> Result<(), AppError> {
    let auth = anonymous_client(cli).login(username, password)?;
    store_session(&auth.data);
    if cli.json {
        print_json(&auth.data);
    } else {
        println!(
            "Logged in as {} ({})",
            auth.data.username,
            auth.data.roles.join(", ")
        );
        print_expiry(&auth.data.expires);
    }
    Ok(())
}

fn refresh(cli: &Cli) -> Result<(), AppError> {
    let stored = Session::load().ok_or(AppError::NotLoggedIn)?;
    let auth = anonymous_client(cli).refresh(&stored.refresh_token)?;
    store_session(&auth.data);
    if cli.json {
        print_json(&auth.data);
    } else {
        println!("Session refreshed.");
        print_expiry(&auth.data.expires);
    }
    Ok(())
}

fn logout() -> Result<(), AppError> {
    if Session::clear() {
        println!("Session removed.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}

fn whoami(cli: &Cli, opts: &TableOptions) -> Result<(), AppError> {
    let user = client(cli)?.me()?;
    if cli.json {
        print_json(&user);
    } else {
        print_user_table(&[user], opts);
    }
    Ok(())
}

fn show_menu(cli: &Cli) {
    if cli.json {
        print_json(&menu::MENU);
    } else {
        print_menu_table(cli.use_color());
    }
}

fn user_command(cli: &Cli, command: &UserCommands, opts: &TableOptions) -> Result<(), AppError> {
    let client = client(cli)?;
    match command {
        UserCommands::List {
            skip,
            limit,
            search,
            active,
            role,
        } => {
            let params = UserListParams {
                skip: *skip,
                limit: *limit,
                search: search.clone(),
                is_active: *active,
                role_name: role.clone(),
            };
            let list = client.list_users(&params)?;
            if cli.json {
                print_json(&list);
            } else if list.data.is_empty() {
                println!("No users found.");
            } else {
                print_user_table(&list.data, opts);
                print_list_summary(list.data.len(), list.total, "users");
            }
        }
        UserCommands::Create {
            username,
            email,
            password,
            full_name,
        } => {
            let user = client.create_user(&UserCreate {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                full_name: full_name.clone(),
            })?;
            if cli.json {
                print_json(&user);
            } else {
                println!("Created user {} (id {})", user.username, user.id);
            }
        }
        UserCommands::Show { id } => {
            let user = client.get_user(*id)?;
            if cli.json {
                print_json(&user);
            } else {
                print_user_table(&[user], opts);
            }
        }
        UserCommands::Update {
            id,
            username,
            email,
            full_name,
            password,
            active,
            role_ids,
        } => {
            let update = UserUpdate {
                username: username.clone(),
                email: email.clone(),
                full_name: full_name.clone(),
                password: password.clone(),
                is_active: *active,
                role_ids: role_ids.clone(),
            };
            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let user = client.update_user(*id, &update)?;
            if cli.json {
                print_json(&user);
            } else {
                println!("Updated user {} (id {})", user.username, user.id);
            }
        }
        UserCommands::Delete { id } => {
            let response = client.delete_user(*id)?;
            println!("{}", response.message);
        }
        UserCommands::ResetPassword { id } => {
            let reset = client.reset_password(*id)?;
            if cli.json {
                print_json(&reset);
            } else {
                println!("{}", reset.message);
                println!("New password: {}", reset.new_password);
            }
        }
    }
    Ok(())
}

fn role_command(cli: &Cli, command: &RoleCommands, opts: &TableOptions) -> Result<(), AppError> {
    let client = client(cli)?;
    match command {
        RoleCommands::List {
            skip,
            limit,
            search,
            active,
        } => {
            let params = RoleListParams {
                skip: *skip,
                limit: *limit,
                search: search.clone(),
                is_active: *active,
            };
            let list = client.list_roles(&params)?;
            if cli.json {
                print_json(&list);
            } else if list.data.is_empty() {
                println!("No roles found.");
            } else {
                print_role_table(&list.data, opts);
                print_list_summary(list.data.len(), list.total, "roles");
            }
        }
        RoleCommands::Create { name, description } => {
            let role = client.create_role(&RoleCreate {
                name: name.clone(),
                description: description.clone(),
                is_active: None,
            })?;
            if cli.json {
                print_json(&role);
            } else {
                println!("Created role {} (id {})", role.name, role.id);
            }
        }
        RoleCommands::Show { id } => {
            let role = client.get_role(*id)?;
            if cli.json {
                print_json(&role);
            } else {
                print_role_table(&[role], opts);
            }
        }
        RoleCommands::Update {
            id,
            name,
            description,
            active,
        } => {
            let update = RoleUpdate {
                name: name.clone(),
                description: description.clone(),
                is_active: *active,
            };
            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let role = client.update_role(*id, &update)?;
            if cli.json {
                print_json(&role);
            } else {
                println!("Updated role {} (id {})", role.name, role.id);
            }
        }
        RoleCommands::Delete { id } => {
            let response = client.delete_role(*id)?;
            println!("{}", response.message);
        }
        RoleCommands::Assign { user_id, role_ids } => {
            let response = client.assign_roles(&UserRoleAssign {
                user_id: *user_id,
                role_ids: role_ids.clone(),
            })?;
            println!("{}", response.message);
        }
        RoleCommands::Users { id, skip, limit } => {
            let users = client.role_users(*id, *skip, *limit)?;
            if cli.json {
                print_json(&users);
            } else if users.is_empty() {
                println!("No users hold this role.");
            } else {
                print_role_user_table(&users, opts);
            }
        }
    }
    Ok(())
}
