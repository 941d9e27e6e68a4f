use std::sync::Arc;

use iced::widget::{button, column, container, row, rule, scrollable, text, text_input};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use sagasu_api::AniListClient;
use sagasu_core::config::AppConfig;
use sagasu_core::models::AnimeRecord;
use sagasu_core::session::SearchSession;

use crate::cover_cache::{self, CoverCache, CoverState};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::widgets;
use crate::window_state::WindowState;

/// Application state: the query input, the live search session, and the
/// current selection. Selections resolve against the session that
/// produced the displayed list, never against a fresh network call.
pub struct Sagasu {
    query: String,
    session: SearchSession,
    selected: Option<usize>,
    searching: bool,
    status_message: String,
    cover_cache: CoverCache,
    colors: ColorScheme,
    window_state: WindowState,
    client: Arc<AniListClient>,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    SearchFinished {
        query: String,
        result: Result<Vec<AnimeRecord>, String>,
    },
    ResultSelected(usize),
    CoverLoaded {
        anime_id: u64,
        result: Result<std::path::PathBuf, String>,
    },
    WindowEvent(window::Event),
}

impl Sagasu {
    pub fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });

        let app = Self {
            query: String::new(),
            session: SearchSession::new(),
            selected: None,
            searching: false,
            status_message: "Ready".into(),
            cover_cache: CoverCache::default(),
            colors: ColorScheme::dark(),
            window_state: WindowState::load(),
            client: Arc::new(AniListClient::new(config.api.endpoint)),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("sagasu")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(new_query) => {
                self.query = new_query;
                Task::none()
            }
            Message::SearchSubmitted => {
                // One search at a time; the button is disabled while one
                // is outstanding, but on_submit can still race it.
                if self.searching {
                    return Task::none();
                }
                let query = self.query.trim().to_string();
                if query.is_empty() {
                    self.status_message = "Please enter an anime title.".into();
                    return Task::none();
                }

                self.searching = true;
                self.status_message = format!("Searching for \"{query}\"...");

                let client = self.client.clone();
                let q = query.clone();
                Task::perform(
                    async move { client.search(&q).await.map_err(|e| e.to_string()) },
                    move |result| Message::SearchFinished {
                        query: query.clone(),
                        result,
                    },
                )
            }
            Message::SearchFinished { query, result } => {
                self.searching = false;
                match result {
                    Ok(results) => {
                        let count = results.len();
                        self.session.replace(query.clone(), results);
                        if count == 0 {
                            self.selected = None;
                            self.status_message = format!("No results found for \"{query}\".");
                            return Task::none();
                        }
                        self.status_message = if count == 1 {
                            format!("1 result for \"{query}\"")
                        } else {
                            format!("{count} results for \"{query}\"")
                        };
                        // Select the first result by default.
                        self.select_index(0)
                    }
                    Err(e) => {
                        // Previous results stay as they were; the failure
                        // is a one-shot notice, never retried.
                        tracing::warn!("search failed: {e}");
                        self.status_message = format!("Search failed: {e}");
                        Task::none()
                    }
                }
            }
            Message::ResultSelected(index) => self.select_index(index),
            Message::CoverLoaded { anime_id, result } => {
                match result {
                    Ok(path) => {
                        self.cover_cache
                            .states
                            .insert(anime_id, CoverState::Loaded(path));
                    }
                    Err(_) => {
                        self.cover_cache.states.insert(anime_id, CoverState::Failed);
                    }
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    /// Select a result and request its cover if needed.
    ///
    /// An out-of-range index means the view and the session disagree,
    /// which a correct binding never produces; report it instead of
    /// ignoring it.
    fn select_index(&mut self, index: usize) -> Task<Message> {
        let (anime_id, cover_url) = match self.session.selected(index) {
            Ok(record) => (record.id, record.cover_url.clone()),
            Err(e) => {
                tracing::error!("selection out of sync with result list: {e}");
                self.status_message = e.to_string();
                return Task::none();
            }
        };
        self.selected = Some(index);
        self.request_cover(anime_id, cover_url.as_deref())
    }

    /// Request a cover image download for an anime if not already requested.
    fn request_cover(&mut self, anime_id: u64, cover_url: Option<&str>) -> Task<Message> {
        let Some(url) = cover_url else {
            // No cover URL available — mark as failed so the placeholder renders.
            self.cover_cache
                .states
                .entry(anime_id)
                .or_insert(CoverState::Failed);
            return Task::none();
        };
        if self.cover_cache.states.contains_key(&anime_id) {
            return Task::none();
        }
        // Check disk cache first.
        let path = cover_cache::cover_path(anime_id);
        if path.exists() {
            self.cover_cache
                .states
                .insert(anime_id, CoverState::Loaded(path));
            return Task::none();
        }
        self.cover_cache
            .states
            .insert(anime_id, CoverState::Loading);
        let url = url.to_string();
        Task::perform(
            async move { cover_cache::fetch_cover(anime_id, url).await },
            move |result| Message::CoverLoaded { anime_id, result },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;

        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Enter an anime title...", &self.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::SearchSubmitted)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::Fill)
            .style(theme::text_input_style(cs));

        let search_button = button(
            text(if self.searching { "Searching..." } else { "Search" })
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .padding([style::SPACE_SM, style::SPACE_LG])
        .on_press_maybe((!self.searching).then_some(Message::SearchSubmitted))
        .style(theme::primary_button(cs));

        let header = row![search_icon, search_input, search_button]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .padding([style::SPACE_SM, style::SPACE_LG]);

        let count_row = container(
            text(if self.session.is_empty() {
                String::new()
            } else if self.session.len() == 1 {
                "1 result".into()
            } else {
                format!("{} results", self.session.len())
            })
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .padding([0.0, style::SPACE_LG]);

        let list: Element<'_, Message> = if self.session.is_empty() {
            let msg = if self.session.last_query().is_empty() {
                "Search AniList for an anime title."
            } else {
                "No matching anime found."
            };
            container(
                text(msg)
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        } else {
            let items: Vec<Element<'_, Message>> = self
                .session
                .results()
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    widgets::result_list_item(cs, i, record, self.selected, Message::ResultSelected)
                })
                .collect();

            scrollable(
                column(items)
                    .spacing(style::SPACE_XXS)
                    .padding([style::SPACE_XS, style::SPACE_LG]),
            )
            .height(Length::Fill)
            .into()
        };

        let results_pane = column![header, count_row, rule::horizontal(1), list]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill);

        let body: Element<'_, Message> = match self.selected.and_then(|i| self.session.selected(i).ok()) {
            Some(record) => {
                let detail = widgets::detail_panel(cs, record, self.cover_cache.get(record.id));
                row![
                    container(results_pane).width(Length::FillPortion(3)),
                    rule::vertical(1),
                    container(scrollable(detail).height(Length::Fill))
                        .width(Length::FillPortion(2))
                        .height(Length::Fill),
                ]
                .height(Length::Fill)
                .into()
            }
            None => container(results_pane)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![container(body).height(Length::Fill), status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::window_events()
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }
}
