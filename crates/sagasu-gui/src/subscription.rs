use iced::Subscription;

use crate::app::Message;

/// Window move/resize events, persisted for the next session.
pub fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Window(e) => Some(Message::WindowEvent(e)),
        _ => None,
    })
}
