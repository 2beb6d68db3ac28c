pub mod farmer_registration;
pub mod home;
pub mod login;
pub mod manage_team;
pub mod profile;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Page {
    Home,
    ManageTeam,
    FarmerRegistration,
    Profile,
    Login,
}

impl Page {
    /// Route path used for active-entry matching in the sidebar. Paths
    /// are disjoint by construction.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::ManageTeam => "/manage-team",
            Page::FarmerRegistration => "/farmer-registration",
            Page::Profile => "/profile",
            Page::Login => "/login",
        }
    }
}
