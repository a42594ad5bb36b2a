use ipc_nexus::{Action, Component, Context, Event, EventContext, Props, View};
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

/// (label, description, path)
const SECTIONS: &[(&str, &str, &str)] = &[
    ("Groups", "Routing groups and their current targets", "/groups"),
    ("Usage", "How schedules and targets are resolved", "/usage"),
    ("Upload", "Import date and day schedules from CSV", "/upload"),
];

/// Landing view: a selectable list of sections.
pub struct IndexPage {
    props: Props,
    selected: usize,
}

impl IndexPage {
    pub fn selected_path(&self) -> &'static str {
        SECTIONS[self.selected].2
    }
}

impl View for IndexPage {
    fn build(props: Props) -> Self {
        Self { props, selected: 0 }
    }
}

impl Component for IndexPage {
    fn on_mount(&mut self, _cx: &mut Context) {
        tracing::trace!(props = %self.props, "index mounted");
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let items: Vec<ListItem> = SECTIONS
            .iter()
            .enumerate()
            .map(|(i, (label, desc, path))| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "> " } else { "  " };
                let color = if is_selected { Color::Cyan } else { Color::White };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(prefix, Style::default().fg(color)),
                        Span::styled(
                            *label,
                            Style::default().fg(color).add_modifier(if is_selected {
                                Modifier::BOLD
                            } else {
                                Modifier::empty()
                            }),
                        ),
                        Span::styled(format!("  {path}"), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(*desc, Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Index ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[0]);

        let hint = Paragraph::new(" ↑/↓ select │ Enter open │ :/group/<id> to open a group ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else {
                        self.selected = SECTIONS.len() - 1;
                    }
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected < SECTIONS.len() - 1 {
                        self.selected += 1;
                    } else {
                        self.selected = 0;
                    }
                    None
                }
                KeyCode::Enter => Some(Action::Navigate(self.selected_path().to_string())),
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

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_selection_wraps_and_opens() {
        let mut page = IndexPage::build(Props::new());
        let mut cx = EventContext::new(AppContext::detached(), Rect::default());

        assert_eq!(page.handle_event(key(KeyCode::Up), &mut cx), None);
        assert_eq!(page.selected_path(), "/upload");

        page.handle_event(key(KeyCode::Down), &mut cx);
        assert_eq!(page.selected_path(), "/groups");

        page.handle_event(key(KeyCode::Char('j')), &mut cx);
        assert_eq!(
            page.handle_event(key(KeyCode::Enter), &mut cx),
            Some(Action::Navigate("/usage".into()))
        );
    }
}
