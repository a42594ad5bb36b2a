use ipc_nexus::{Action, Component, Context, Event, EventContext};
use crossterm::event::KeyCode;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Top-level sections, reachable with the number keys.
pub const LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Groups", "/groups"),
    ("Usage", "/usage"),
    ("Upload", "/upload"),
];

/// The top menu. Mounted once, outside the router.
#[derive(Default)]
pub struct Menu {
    active: String,
}

impl Menu {
    pub fn set_active(&mut self, path: &str) {
        if self.active != path {
            self.active = path.to_string();
        }
    }

    /// Index into `LINKS` of the section `active` belongs to.
    pub fn active_link(&self) -> Option<usize> {
        LINKS.iter().position(|(_, path)| {
            *path == self.active || (*path == "/groups" && self.active.starts_with("/group/"))
        })
    }
}

impl Component for Menu {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let active = self.active_link();

        let mut spans = Vec::new();
        for (i, (label, _)) in LINKS.iter().enumerate() {
            let style = if Some(i) == active {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, label), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.active.clone(), Style::default().fg(Color::DarkGray)));

        let menu = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .title(" ipc ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(menu, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char(c) => {
                    let n = c.to_digit(10)? as usize;
                    let (_, path) = LINKS.get(n.checked_sub(1)?)?;
                    Some(Action::Navigate(path.to_string()))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ipc_nexus::AppContext;
    use ratatui::layout::Rect;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut menu = Menu::default();
        let mut cx = EventContext::new(AppContext::detached(), Rect::default());

        assert_eq!(menu.handle_event(key('3'), &mut cx), Some(Action::Navigate("/usage".into())));
        assert_eq!(menu.handle_event(key('1'), &mut cx), Some(Action::Navigate("/".into())));
        assert_eq!(menu.handle_event(key('0'), &mut cx), None);
        assert_eq!(menu.handle_event(key('9'), &mut cx), None);
        assert_eq!(menu.handle_event(key('x'), &mut cx), None);
    }

    #[test]
    fn test_active_link() {
        let mut menu = Menu::default();
        menu.set_active("/group/42");
        assert_eq!(menu.active_link(), Some(1));
        menu.set_active("/upload");
        assert_eq!(menu.active_link(), Some(3));
        menu.set_active("/nonexistent");
        assert_eq!(menu.active_link(), None);
    }
}
