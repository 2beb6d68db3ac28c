use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::profile::{FetchStatus, ProfileField, ProfileRecord, ProfileScreen, UpdateStatus};
use crate::theme::{accent_button_style, DRAWER_BG, DRAWER_TEXT_INACTIVE};

pub fn view<'a>(screen: &'a ProfileScreen) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &screen.fetch {
        FetchStatus::Loading => text("Loading profile…").size(14).into(),
        FetchStatus::Failed(message) => text(message.as_str()).size(14).into(),
        FetchStatus::Loaded(record) => loaded_view(record, screen),
    };

    container(
        container(column![text("Profile").size(28), content].spacing(24))
            .padding(24)
            .width(Length::Fill)
            .max_width(720)
            .style(|_| container::background(DRAWER_BG)),
    )
    .padding(24)
    .center_x(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn loaded_view<'a>(record: &'a ProfileRecord, screen: &'a ProfileScreen) -> Element<'a, Message> {
    let header = column![
        text(record.display_name()).size(22),
        text(record.role.as_deref().unwrap_or_default())
            .size(14)
            .style(|_| text::Style {
                color: Some(DRAWER_TEXT_INACTIVE),
            }),
        text(record.email.as_deref().unwrap_or_default()).size(14),
    ]
    .spacing(4);

    let form = column![
        field_row("First name", ProfileField::FirstName, &screen.form.first_name),
        field_row("Last name", ProfileField::LastName, &screen.form.last_name),
        field_row("Email", ProfileField::Email, &screen.form.email),
        field_row("Profile image", ProfileField::AvatarUrl, &screen.form.avatar_url),
        field_row("Role", ProfileField::Role, &screen.form.role),
    ]
    .spacing(12);

    let submit = button(text("Save changes").size(14))
        .style(accent_button_style)
        .on_press(Message::SubmitProfile)
        .padding(8);

    let status: Element<'a, Message> = match &screen.update {
        UpdateStatus::Idle => Space::new().into(),
        UpdateStatus::InFlight => text("Updating profile…").size(14).into(),
        UpdateStatus::Succeeded => text("Profile updated.").size(14).into(),
        UpdateStatus::Failed(message) => text(message.as_str()).size(14).into(),
    };

    column![header, form, row![submit].spacing(12), status]
        .spacing(24)
        .into()
}

fn field_row<'a>(label: &'a str, field: ProfileField, value: &'a str) -> Element<'a, Message> {
    column![
        text(label).size(13).style(|_| text::Style {
            color: Some(DRAWER_TEXT_INACTIVE),
        }),
        text_input(label, value)
            .on_input(move |edited| Message::ProfileFieldChanged(field, edited))
            .size(14)
            .padding(8),
    ]
    .spacing(4)
    .into()
}
