use std::path::PathBuf;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};

use crate::data::profile_store;
use crate::message::Message;
use crate::profile::ProfileScreen;
use crate::screens::Page;
use crate::session::{self, Role};
use crate::sidebar::{self, NavEntry, SidebarState};
use crate::theme::{
    accent_button_style, danger_button_style, secondary_button_style, ACCENT, DRAWER_BG,
    DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE, DRAWER_TEXT_INACTIVE,
};
use lucide_icons::iced::{
    icon_house, icon_leaf, icon_log_out, icon_panel_left_close, icon_panel_left_open,
    icon_user, icon_users,
};

pub struct App {
    theme: Theme,
    current_page: Page,
    role: Role,
    sidebar_collapsed: bool,
    sidebar: SidebarState,
    profile: ProfileScreen,
    logout_error: Option<String>,
    db_path: PathBuf,
    session_path: PathBuf,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let session_path = session::default_session_path();

        let app = Self {
            theme: Theme::Dark,
            current_page: Page::FarmerRegistration,
            role: Role::Agrovet,
            sidebar_collapsed: false,
            sidebar: SidebarState::new(),
            profile: ProfileScreen::new(),
            logout_error: None,
            db_path: profile_store::default_db_path(),
            session_path: session_path.clone(),
        };

        let boot = Task::perform(
            session::load_session(session_path),
            Message::SessionLoaded,
        );

        (app, boot)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page) => {
                self.current_page = page;

                if page == Page::Profile {
                    self.profile = ProfileScreen::new();
                    return Task::perform(
                        profile_store::load_profile(self.db_path.clone()),
                        Message::ProfileLoaded,
                    );
                }

                Task::none()
            }
            Message::SessionLoaded(Ok(Some(session))) => {
                self.role = session.role;
                self.current_page = match session.role {
                    Role::Admin => Page::Home,
                    Role::Agrovet => Page::FarmerRegistration,
                };
                Task::none()
            }
            // Without a stored session the agrovet layout stays in place.
            Message::SessionLoaded(Ok(None)) | Message::SessionLoaded(Err(_)) => Task::none(),
            Message::ProfileLoaded(result) => {
                self.profile.apply_fetch(result);
                Task::none()
            }
            Message::ProfileFieldChanged(field, value) => {
                self.profile.edit(field, value);
                Task::none()
            }
            Message::SubmitProfile => {
                let Some(seq) = self.profile.begin_submit() else {
                    return Task::none();
                };

                let record = self.profile.form.to_record();
                Task::perform(
                    profile_store::save_profile(self.db_path.clone(), record),
                    move |result| Message::ProfileSaved { seq, result },
                )
            }
            Message::ProfileSaved { seq, result } => {
                self.profile.apply_update(seq, result);
                Task::none()
            }
            Message::RequestLogout => {
                self.sidebar.request_logout();
                Task::none()
            }
            Message::CancelLogout => {
                self.sidebar.cancel_logout();
                Task::none()
            }
            Message::ConfirmLogout => {
                self.current_page = self.sidebar.confirm_logout();
                Task::perform(
                    session::clear_session(self.session_path.clone()),
                    Message::SessionCleared,
                )
            }
            Message::SessionCleared(Ok(())) => Task::none(),
            Message::SessionCleared(Err(message)) => {
                self.logout_error = Some(message);
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = self.content_view();

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(accent_button_style);

        let brand: Element<'a, Message> = if self.sidebar_collapsed {
            icon_leaf().size(20).into()
        } else {
            row![icon_leaf().size(20), text("FruitGuard").size(20)]
                .spacing(8)
                .align_y(Alignment::Center)
                .into()
        };

        let entries = sidebar::entries(self.role)
            .iter()
            .map(|entry| self.sidebar_button(entry));

        let logout = self.logout_control();

        let content = column![toggle, brand, Space::new().height(Length::Fixed(12.0))]
            .push(column(entries).spacing(6))
            .push(Space::new().height(Length::Fill))
            .push(logout)
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(220.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, entry: &'a NavEntry) -> Element<'a, Message> {
        // The admin menu is static; only the agrovet variant marks the
        // entry matching the current path.
        let active = sidebar::route_aware(self.role)
            && entry.is_active(self.current_page.path());

        let icon = match entry.target {
            Page::Home | Page::FarmerRegistration => icon_house(),
            Page::ManageTeam => icon_users(),
            Page::Profile => icon_user(),
            Page::Login => icon_log_out(),
        }
        .size(18)
        .style(move |_| iced::widget::text::Style {
            color: Some(if active {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let label_text = text(entry.label).style(move |_| iced::widget::text::Style {
            color: Some(if active {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                icon,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![icon, label_text]
                .spacing(12)
                .align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(entry.target))
            .width(Length::Fill)
            .style(move |_, status| {
                let background = if active { ACCENT } else { DRAWER_ITEM_BG };

                let mut color = background;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn logout_control<'a>(&'a self) -> Element<'a, Message> {
        let log_out = button(
            row![icon_log_out().size(18), text("Log out")]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .on_press(Message::RequestLogout)
        .width(Length::Fill)
        .style(secondary_button_style)
        .padding(8);

        if !self.sidebar.logout_open() {
            return log_out.into();
        }

        let confirm = container(
            column![
                text("Do you want to logout?").size(14),
                row![
                    button(text("Cancel").size(14))
                        .style(secondary_button_style)
                        .on_press(Message::CancelLogout),
                    button(text("Proceed").size(14))
                        .style(danger_button_style)
                        .on_press(Message::ConfirmLogout),
                ]
                .spacing(8),
            ]
            .spacing(12),
        )
        .padding(12)
        .style(|_| iced::widget::container::background(DRAWER_ITEM_BG));

        column![log_out, confirm].spacing(8).into()
    }

    fn content_view<'a>(&'a self) -> Element<'a, Message> {
        match self.current_page {
            Page::Home => crate::screens::home::view(),
            Page::ManageTeam => crate::screens::manage_team::view(),
            Page::FarmerRegistration => crate::screens::farmer_registration::view(),
            Page::Profile => crate::screens::profile::view(&self.profile),
            Page::Login => crate::screens::login::view(self.logout_error.as_deref()),
        }
    }
}
