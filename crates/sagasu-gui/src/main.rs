mod app;
mod cover_cache;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("sagasu=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut app = iced::application(app::Sagasu::new, app::Sagasu::update, app::Sagasu::view)
        .title(app::Sagasu::title)
        .subscription(app::Sagasu::subscription)
        .theme(app::Sagasu::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window_size(ws.size());

    if let Some(pos) = ws.position() {
        app = app.position(iced::window::Position::Specific(pos));
    } else {
        app = app.centered();
    }

    app.run()
}
