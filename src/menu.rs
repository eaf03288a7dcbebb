//! Static navigation table mirroring the admin panel's route modules.

use serde::Serialize;

const ALL_ROLES: &[&str] = &["admin", "super_admin", "user"];

#[derive(Debug, Serialize)]
pub(crate) struct MenuEntry {
    pub(crate) path: &'static str,
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) rank: u32,
    pub(crate) redirect: &'static str,
    pub(crate) children: &'static [MenuChild],
}

#[derive(Debug, Serialize)]
pub(crate) struct MenuChild {
    pub(crate) path: &'static str,
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) roles: &'static [&'static str],
}

pub(crate) const MENU: &[MenuEntry] = &[MenuEntry {
    path: "/user-management",
    name: "UserManagement",
    title: "User management",
    icon: "ep:user",
    rank: 10,
    redirect: "/user-management/users",
    children: &[
        MenuChild {
            path: "/user-management/users",
            name: "UserList",
            title: "Users",
            roles: ALL_ROLES,
        },
        MenuChild {
            path: "/user-management/roles",
            name: "RoleList",
            title: "Roles",
            roles: ALL_ROLES,
        },
    ],
}];

/// Entries in display order (ascending rank, then path).
pub(crate) fn entries() -> Vec<&'static MenuEntry> {
    let mut entries: Vec<&MenuEntry> = MENU.iter().collect();
    entries.sort_by_key(|e| (e.rank, e.path));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_management_entry_is_present() {
        let entries = entries();
        let entry = entries
            .iter()
            .find(|e| e.name == "UserManagement")
            .expect("user management entry");
        assert_eq!(entry.path, "/user-management");
        assert_eq!(entry.redirect, "/user-management/users");
        assert_eq!(entry.children.len(), 2);
    }

    #[test]
    fn children_carry_allowed_roles() {
        for entry in entries() {
            for child in entry.children {
                assert!(!child.roles.is_empty(), "{} has no roles", child.path);
                assert!(child.path.starts_with(entry.path));
            }
        }
    }

    #[test]
    fn entries_are_rank_sorted() {
        let ranks: Vec<u32> = entries().iter().map(|e| e.rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn menu_serializes_for_json_output() {
        let json = serde_json::to_value(MENU).unwrap();
        assert_eq!(json[0]["name"], "UserManagement");
        assert_eq!(json[0]["children"][1]["title"], "Roles");
    }
}
