//! Frame rendering.

use crate::app::App;
use crate::ui;
use ratatui::Frame;

impl App {
    /// Draw the whole screen and remember its size for hit-testing.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = self.layout();
        let theme = self.theme;

        ui::header::render_header(
            f,
            layout.header,
            &self.settings.base_url,
            &self.health,
            self.color_theme,
            &theme,
        );
        ui::search_bar::render_search_bar(
            f,
            layout.input,
            layout.button,
            &self.input,
            self.search_label(),
            self.loading,
            &theme,
        );
        if let Some(banner) = &self.banner {
            ui::banner::render_banner(f, layout.banner, banner, &theme);
        }

        self.card_offset = ui::cards::scroll_offset(
            &self.cards,
            self.selected,
            self.card_offset,
            layout.cards.height,
        );
        if self.cards.is_empty() {
            let message = self
                .empty_message
                .as_deref()
                .unwrap_or(crate::app::search::WELCOME_MESSAGE);
            ui::cards::render_placeholder(f, layout.cards, message, &theme);
        } else {
            ui::cards::render_cards(
                f,
                layout.cards,
                &self.cards,
                self.selected,
                self.card_offset,
                &theme,
            );
        }

        ui::footer::render_footer(f, layout.footer, self.cards.len(), &theme);

        if self.suggestions.is_visible() {
            ui::dropdown::render_dropdown(
                f,
                layout.dropdown(self.suggestions.items.len()),
                &self.suggestions.items,
                self.suggestions.highlighted,
                &theme,
            );
        }

        ui::toast::render_toasts(f, &self.toasts, &theme);

        if let Some(notice) = &self.notice {
            ui::notice::render_notice(f, notice, &theme);
        }
    }
}
