//! Sidebar navigation entries and the logout confirmation state.
//!
//! Two variants exist: the admin sidebar renders a fixed menu, the agrovet
//! sidebar additionally marks the entry whose target path equals the
//! current path. Active matching is exact string equality, no prefix
//! matching; entries are expected to have disjoint paths.

use crate::screens::Page;
use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: Page,
}

impl NavEntry {
    pub fn target_path(&self) -> &'static str {
        self.target.path()
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.target.path() == current_path
    }
}

const ADMIN_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        label: "Home",
        target: Page::Home,
    },
    NavEntry {
        label: "Manage Team",
        target: Page::ManageTeam,
    },
    NavEntry {
        label: "Profile",
        target: Page::Profile,
    },
];

const AGROVET_ENTRIES: [NavEntry; 2] = [
    NavEntry {
        label: "Home",
        target: Page::FarmerRegistration,
    },
    NavEntry {
        label: "Profile",
        target: Page::Profile,
    },
];

pub fn entries(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => &ADMIN_ENTRIES,
        Role::Agrovet => &AGROVET_ENTRIES,
    }
}

/// Whether the sidebar variant computes an active entry from the current
/// path. The admin menu is static.
pub fn route_aware(role: Role) -> bool {
    matches!(role, Role::Agrovet)
}

/// Local sidebar state: the logout confirmation is closed until the user
/// clicks "Log out", and closes again on "Cancel". "Proceed" navigates to
/// the login page.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    logout_confirm: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logout_open(&self) -> bool {
        self.logout_confirm
    }

    pub fn request_logout(&mut self) {
        self.logout_confirm = true;
    }

    pub fn cancel_logout(&mut self) {
        self.logout_confirm = false;
    }

    /// Confirms the logout. The dialog closes so the sidebar starts clean
    /// if the user signs back in; the caller performs the navigation.
    pub fn confirm_logout(&mut self) -> Page {
        self.logout_confirm = false;
        Page::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agrovet_entries_and_paths() {
        let entries = entries(Role::Agrovet);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Home");
        assert_eq!(entries[0].target_path(), "/farmer-registration");
        assert_eq!(entries[1].label, "Profile");
        assert_eq!(entries[1].target_path(), "/profile");
    }

    #[test]
    fn test_admin_entries_are_fixed_and_not_route_aware() {
        let entries = entries(Role::Admin);
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Home", "Manage Team", "Profile"]);
        assert!(!route_aware(Role::Admin));
        assert!(route_aware(Role::Agrovet));
    }

    #[test]
    fn test_exactly_the_matching_entry_is_active() {
        let entries = entries(Role::Agrovet);

        let active: Vec<bool> = entries
            .iter()
            .map(|entry| entry.is_active("/farmer-registration"))
            .collect();
        assert_eq!(active, [true, false]);
    }

    #[test]
    fn test_changing_the_path_moves_the_active_marker() {
        let entries = entries(Role::Agrovet);

        assert!(entries[0].is_active("/farmer-registration"));
        assert!(!entries[1].is_active("/farmer-registration"));

        assert!(!entries[0].is_active("/profile"));
        assert!(entries[1].is_active("/profile"));
    }

    #[test]
    fn test_no_prefix_matching() {
        let entries = entries(Role::Agrovet);
        assert!(!entries[1].is_active("/profile/settings"));
        assert!(!entries[1].is_active("/prof"));
    }

    #[test]
    fn test_logout_dialog_opens_and_cancel_is_idempotent() {
        let mut sidebar = SidebarState::new();
        assert!(!sidebar.logout_open());

        sidebar.request_logout();
        assert!(sidebar.logout_open());

        sidebar.cancel_logout();
        assert!(!sidebar.logout_open());

        sidebar.cancel_logout();
        assert!(!sidebar.logout_open());
    }

    #[test]
    fn test_confirm_logout_targets_the_login_page() {
        let mut sidebar = SidebarState::new();
        sidebar.request_logout();

        let target = sidebar.confirm_logout();
        assert_eq!(target, Page::Login);
        assert_eq!(target.path(), "/login");
        assert!(!sidebar.logout_open());
    }
}
