use iced::widget::{column, container, text};
use iced::Element;

use crate::message::Message;
use crate::theme::DRAWER_TEXT_INACTIVE;

/// Shown after a confirmed logout. Signing back in is handled outside the
/// app shell, so this page only reports that the session ended.
pub fn view<'a>(logout_error: Option<&'a str>) -> Element<'a, Message> {
    let mut content = column![
        text("Signed out").size(28),
        text("You have been logged out of FruitGuard.")
            .size(14)
            .style(|_| text::Style {
                color: Some(DRAWER_TEXT_INACTIVE),
            }),
    ]
    .spacing(12);

    if let Some(message) = logout_error {
        content = content.push(text(message).size(14));
    }

    container(content).padding(24).into()
}
