//! Profile screen state: the fetched record, the editable form and the
//! lifecycle of an in-flight save.

/// A user profile as stored by the backend. Every field is optional; a
/// missing field renders as empty text, never as a "null" placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

impl ProfileRecord {
    /// "First Last", skipping whichever parts are absent.
    pub fn display_name(&self) -> String {
        let mut name = String::new();

        if let Some(first) = self.first_name.as_deref() {
            name.push_str(first);
        }

        if let Some(last) = self.last_name.as_deref() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(last);
        }

        name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Failed(String),
    Loaded(ProfileRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Idle,
    InFlight,
    Failed(String),
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    AvatarUrl,
    Role,
}

/// The five text inputs of the profile form. Always plain strings; absent
/// record fields become empty inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: String,
    pub role: String,
}

impl ProfileForm {
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            avatar_url: record.avatar_url.clone().unwrap_or_default(),
            role: record.role.clone().unwrap_or_default(),
        }
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::AvatarUrl => &self.avatar_url,
            ProfileField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::AvatarUrl => self.avatar_url = value,
            ProfileField::Role => self.role = value,
        }
    }

    /// The record to persist. Cleared inputs are stored as absent fields.
    pub fn to_record(&self) -> ProfileRecord {
        fn optional(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_owned())
            }
        }

        ProfileRecord {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            email: optional(&self.email),
            avatar_url: optional(&self.avatar_url),
            role: optional(&self.role),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    pub fetch: FetchStatus,
    pub form: ProfileForm,
    pub update: UpdateStatus,
    submit_seq: u64,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            fetch: FetchStatus::Loading,
            form: ProfileForm::default(),
            update: UpdateStatus::Idle,
            submit_seq: 0,
        }
    }

    /// Settles the initial fetch. On success the form is seeded from the
    /// record; on failure the error text is kept for rendering.
    pub fn apply_fetch(&mut self, result: Result<ProfileRecord, String>) {
        match result {
            Ok(record) => {
                self.form = ProfileForm::from_record(&record);
                self.fetch = FetchStatus::Loaded(record);
            }
            Err(message) => {
                self.fetch = FetchStatus::Failed(message);
            }
        }
    }

    pub fn edit(&mut self, field: ProfileField, value: String) {
        self.form.set(field, value);
    }

    /// Starts a save if one can start: the profile must be loaded and no
    /// save may already be in flight. Returns the sequence number to tag
    /// the settlement message with, or `None` if the submit is rejected.
    pub fn begin_submit(&mut self) -> Option<u64> {
        if !matches!(self.fetch, FetchStatus::Loaded(_)) {
            return None;
        }

        if self.update == UpdateStatus::InFlight {
            return None;
        }

        self.submit_seq += 1;
        self.update = UpdateStatus::InFlight;
        Some(self.submit_seq)
    }

    /// Settles a save. A settlement carrying a stale sequence number is
    /// dropped so it cannot overwrite the state of a newer request.
    pub fn apply_update(&mut self, seq: u64, result: Result<(), String>) {
        if seq != self.submit_seq {
            return;
        }

        self.update = match result {
            Ok(()) => UpdateStatus::Succeeded,
            Err(message) => UpdateStatus::Failed(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn esther() -> ProfileRecord {
        ProfileRecord {
            first_name: Some("Esther".to_owned()),
            last_name: Some("Nyambura".to_owned()),
            email: Some("esthernyambura@example.com".to_owned()),
            avatar_url: Some("/profile.jpg".to_owned()),
            role: Some("Agrovet".to_owned()),
        }
    }

    #[test]
    fn test_new_screen_is_loading_without_form_values() {
        let screen = ProfileScreen::new();
        assert_eq!(screen.fetch, FetchStatus::Loading);
        assert_eq!(screen.form, ProfileForm::default());
    }

    #[test]
    fn test_fetch_failure_keeps_error_text() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Err("Failed to load profile".to_owned()));
        assert_eq!(
            screen.fetch,
            FetchStatus::Failed("Failed to load profile".to_owned())
        );
    }

    #[test]
    fn test_loaded_record_seeds_form_and_display_name() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(esther()));

        assert_eq!(screen.form.first_name, "Esther");
        assert_eq!(screen.form.role, "Agrovet");
        assert_eq!(screen.form.email, "esthernyambura@example.com");

        match &screen.fetch {
            FetchStatus::Loaded(record) => {
                assert_eq!(record.display_name(), "Esther Nyambura");
            }
            other => panic!("expected loaded profile, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_fields_render_empty_not_null() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(ProfileRecord::default()));

        assert_eq!(screen.form, ProfileForm::default());

        match &screen.fetch {
            FetchStatus::Loaded(record) => {
                assert_eq!(record.display_name(), "");
                assert!(!record.display_name().contains("null"));
            }
            other => panic!("expected loaded profile, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_changes_only_the_edited_field() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(esther()));

        screen.edit(ProfileField::FirstName, "Jane".to_owned());

        assert_eq!(screen.form.first_name, "Jane");
        assert_eq!(screen.form.last_name, "Nyambura");
        assert_eq!(screen.form.email, "esthernyambura@example.com");
        assert_eq!(screen.form.role, "Agrovet");
    }

    #[test]
    fn test_submit_requires_loaded_profile() {
        let mut screen = ProfileScreen::new();
        assert_eq!(screen.begin_submit(), None);
        assert_eq!(screen.update, UpdateStatus::Idle);
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(esther()));

        let seq = screen.begin_submit();
        assert_eq!(seq, Some(1));
        assert_eq!(screen.update, UpdateStatus::InFlight);

        assert_eq!(screen.begin_submit(), None);
    }

    #[test]
    fn test_failed_update_keeps_form_editable() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(esther()));

        let seq = screen.begin_submit().unwrap();
        screen.apply_update(seq, Err("Update failed".to_owned()));

        assert_eq!(screen.update, UpdateStatus::Failed("Update failed".to_owned()));

        screen.edit(ProfileField::LastName, "Wanjiru".to_owned());
        assert_eq!(screen.form.last_name, "Wanjiru");

        assert_eq!(screen.begin_submit(), Some(2));
    }

    #[test]
    fn test_stale_settlement_is_dropped() {
        let mut screen = ProfileScreen::new();
        screen.apply_fetch(Ok(esther()));

        let first = screen.begin_submit().unwrap();
        screen.apply_update(first, Err("Update failed".to_owned()));

        let second = screen.begin_submit().unwrap();
        screen.apply_update(first, Ok(()));
        assert_eq!(screen.update, UpdateStatus::InFlight);

        screen.apply_update(second, Ok(()));
        assert_eq!(screen.update, UpdateStatus::Succeeded);
    }

    #[test]
    fn test_form_round_trips_cleared_fields_as_absent() {
        let mut form = ProfileForm::from_record(&esther());
        form.set(ProfileField::AvatarUrl, String::new());

        let record = form.to_record();
        assert_eq!(record.avatar_url, None);
        assert_eq!(record.first_name.as_deref(), Some("Esther"));
    }
}
