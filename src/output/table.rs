use comfy_table::Color;

use crate::api::types::{Role, RoleUser, User};
use crate::menu;
use crate::output::format::{bool_cell, create_styled_table, header_cell, opt_text, styled_cell};
use crate::utils::Timezone;
use crate::utils::time;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) relative: bool,
    pub(crate) timezone: Timezone,
}

impl TableOptions {
    /// Render a server timestamp for a table cell. Unparseable values are
    /// shown raw rather than aborting the listing.
    fn timestamp(&self, raw: &str) -> String {
        let rendered = if self.relative {
            time::relative_time(raw)
        } else {
            self.timezone.render(raw, time::DEFAULT_TEMPLATE)
        };
        rendered.unwrap_or_else(|_| raw.to_string())
    }

    /// Date-only cell. Re-zoning is skipped here; it mainly affects
    /// date-time display, not pure dates.
    fn date(&self, raw: &str) -> String {
        let rendered = if self.relative {
            time::relative_time(raw)
        } else {
            time::format_date(raw)
        };
        rendered.unwrap_or_else(|_| raw.to_string())
    }
}

pub(crate) fn print_user_table(users: &[User], opts: &TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Username", c),
        header_cell("Email", c),
        header_cell("Full name", c),
        header_cell("Active", c),
        header_cell("Superuser", c),
        header_cell("Roles", c),
        header_cell("Created", c),
        header_cell("Updated", c),
    ]);
    for user in users {
        table.add_row(vec![
            styled_cell(&user.id.to_string(), None, false),
            styled_cell(&user.username, None, c),
            styled_cell(&user.email, None, false),
            styled_cell(opt_text(user.full_name.as_deref()), None, false),
            bool_cell(user.is_active, c),
            bool_cell(user.is_superuser, c),
            styled_cell(&user.role_names.join(", "), None, false),
            styled_cell(&opts.timestamp(&user.created_at), None, false),
            styled_cell(&opts.timestamp(&user.updated_at), None, false),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_role_table(roles: &[Role], opts: &TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Name", c),
        header_cell("Description", c),
        header_cell("Active", c),
        header_cell("Created", c),
        header_cell("Updated", c),
    ]);
    for role in roles {
        table.add_row(vec![
            styled_cell(&role.id.to_string(), None, false),
            styled_cell(&role.name, None, c),
            styled_cell(opt_text(role.description.as_deref()), None, false),
            bool_cell(role.is_active, c),
            styled_cell(&opts.timestamp(&role.created_at), None, false),
            styled_cell(&opts.timestamp(&role.updated_at), None, false),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_role_user_table(users: &[RoleUser], opts: &TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Username", c),
        header_cell("Email", c),
        header_cell("Full name", c),
        header_cell("Active", c),
        header_cell("Created", c),
    ]);
    for user in users {
        table.add_row(vec![
            styled_cell(&user.id.to_string(), None, false),
            styled_cell(&user.username, None, c),
            styled_cell(&user.email, None, false),
            styled_cell(opt_text(user.full_name.as_deref()), None, false),
            bool_cell(user.is_active, c),
            styled_cell(&opts.date(&user.created_at), None, false),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_menu_table(use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Rank", use_color),
        header_cell("Path", use_color),
        header_cell("Name", use_color),
        header_cell("Title", use_color),
        header_cell("Icon", use_color),
        header_cell("Roles", use_color),
    ]);
    for entry in menu::entries() {
        table.add_row(vec![
            styled_cell(&entry.rank.to_string(), None, false),
            styled_cell(entry.path, None, use_color),
            styled_cell(entry.name, None, false),
            styled_cell(entry.title, None, false),
            styled_cell(entry.icon, None, false),
            styled_cell("-", None, false),
        ]);
        for child in entry.children {
            let color = if use_color { Some(Color::DarkGrey) } else { None };
            table.add_row(vec![
                styled_cell("", None, false),
                styled_cell(&format!("└ {}", child.path), color, false),
                styled_cell(child.name, None, false),
                styled_cell(child.title, None, false),
                styled_cell("", None, false),
                styled_cell(&child.roles.join(", "), None, false),
            ]);
        }
    }
    println!("{table}");
}

/// Summary line under paged listings.
pub(crate) fn print_list_summary(shown: usize, total: i64, noun: &str) {
    println!("\n  {shown} of {total} {noun}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn opts(relative: bool) -> TableOptions {
        TableOptions {
            use_color: false,
            relative,
            timezone: Timezone::Local,
        }
    }

    #[test]
    fn timestamp_falls_back_to_raw_text() {
        assert_eq!(opts(false).timestamp("###"), "###");
        assert_eq!(opts(true).timestamp("###"), "###");
    }

    #[test]
    fn timestamp_formats_absolute_by_default() {
        assert_eq!(
            opts(false).timestamp("2024-03-05 09:07:03"),
            "2024-03-05 09:07:03"
        );
    }

    #[test]
    fn date_cell_is_date_only() {
        assert_eq!(opts(false).date("2024-03-05 09:07:03"), "2024-03-05");
    }

    #[test]
    fn timestamp_formats_relative_when_requested() {
        let raw = time::format_date_time_default(Local::now() - Duration::minutes(5)).unwrap();
        assert_eq!(opts(true).timestamp(&raw), "5 minutes ago");
    }
}
