//! Bottom status bar: key hints, current toggles, and the transient notice
//! shown after copy/share actions.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

pub struct StatusBar<'a> {
    /// Transient action feedback ("Copied ✅" etc.)
    pub notice: Option<&'a str>,
    /// Whether the notice reports a failure
    pub notice_is_error: bool,
    pub snow_on: bool,
    pub music_on: bool,
    pub song_title: &'a str,
}

const KEY_HINTS: &str =
    "Tab fields  ^T theme  ^S snow  ^P music  ^G song  ^Y copy  ^E share  ^D reveal  ^B confetti  ^R reset  ^Q quit";

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let hint_style = Style::default().fg(theme::text_muted()).bg(theme::bg_surface());
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, hint_style)))
            .style(Style::default().bg(theme::bg_surface()))
            .render(area, buf);

        // Right side: the notice when present, otherwise the toggle summary.
        let right = match self.notice {
            Some(notice) => notice.to_string(),
            None => format!(
                "❄ {}  🔊 {} ({})",
                if self.snow_on { "on" } else { "off" },
                if self.music_on { "on" } else { "off" },
                self.song_title,
            ),
        };
        let right_color = match (self.notice, self.notice_is_error) {
            (Some(_), true) => theme::accent_error(),
            (Some(_), false) => theme::accent_success(),
            (None, _) => theme::text_secondary(),
        };

        let width = right.width() as u16;
        if width < area.width {
            let right_area = Rect {
                x: area.x + area.width - width,
                y: area.y,
                width,
                height: 1,
            };
            Paragraph::new(Line::from(Span::styled(
                right,
                Style::default().fg(right_color).bg(theme::bg_surface()),
            )))
            .render(right_area, buf);
        }
    }
}
