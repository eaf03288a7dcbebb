mod format;
mod json;
mod table;

pub(crate) use json::print_json;
pub(crate) use table::{
    TableOptions, print_list_summary, print_menu_table, print_role_table, print_role_user_table,
    print_user_table,
};
