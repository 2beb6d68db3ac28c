use iced::widget::{column, container, text};
use iced::Element;

use crate::message::Message;
use crate::theme::DRAWER_TEXT_INACTIVE;

pub fn view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Manage Team").size(28),
            text("Invite, review and deactivate team members.")
                .size(14)
                .style(|_| text::Style {
                    color: Some(DRAWER_TEXT_INACTIVE),
                }),
        ]
        .spacing(12),
    )
    .padding(24)
    .into()
}
