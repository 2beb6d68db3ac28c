#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(crate::screens::Page),
    SessionLoaded(Result<Option<crate::session::Session>, String>),
    ProfileLoaded(Result<crate::profile::ProfileRecord, String>),
    ProfileFieldChanged(crate::profile::ProfileField, String),
    SubmitProfile,
    ProfileSaved {
        seq: u64,
        result: Result<(), String>,
    },
    RequestLogout,
    CancelLogout,
    ConfirmLogout,
    SessionCleared(Result<(), String>),
}
