use ipc_nexus::{Action, Component, Context, Event, EventContext};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Bottom bar: key hints, or a path prompt while open.
#[derive(Default)]
pub struct AddressBar {
    input: Option<String>,
}

impl AddressBar {
    /// Open the prompt, pre-filled with `current`.
    pub fn open(&mut self, current: &str) {
        self.input = Some(current.to_string());
    }

    pub fn close(&mut self) {
        self.input = None;
    }

    pub fn is_open(&self) -> bool {
        self.input.is_some()
    }

    #[cfg(test)]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl Component for AddressBar {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let paragraph = match &self.input {
            Some(input) => Paragraph::new(format!("{input}_")).block(
                Block::default()
                    .title(" Go to ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            None => Paragraph::new(" : go to path │ 1-4 sections │ ⌫ back │ q quit ")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::TOP)),
        };
        frame.render_widget(paragraph, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        let input = self.input.as_mut()?;
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter => self.input.take().map(Action::Navigate),
                KeyCode::Esc => {
                    self.close();
                    None
                }
                KeyCode::Backspace => {
                    input.pop();
                    None
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    None
                }
                _ => None,
            },
            Event::Paste(text) => {
                input.push_str(text.trim());
                None
            }
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

    fn cx() -> EventContext {
        EventContext::new(AppContext::detached(), Rect::default())
    }

    #[test]
    fn test_closed_bar_ignores_input() {
        let mut bar = AddressBar::default();
        assert_eq!(bar.handle_event(key(KeyCode::Char('x')), &mut cx()), None);
        assert_eq!(bar.input(), None);
    }

    #[test]
    fn test_edit_and_submit() {
        let mut bar = AddressBar::default();
        bar.open("/groups");
        bar.handle_event(key(KeyCode::Backspace), &mut cx());
        bar.handle_event(key(KeyCode::Char('/')), &mut cx());
        bar.handle_event(Event::Paste("42\n".into()), &mut cx());
        assert_eq!(bar.input(), Some("/group/42"));

        assert_eq!(
            bar.handle_event(key(KeyCode::Enter), &mut cx()),
            Some(Action::Navigate("/group/42".into()))
        );
        assert!(!bar.is_open());
    }

    #[test]
    fn test_escape_cancels() {
        let mut bar = AddressBar::default();
        bar.open("/");
        assert_eq!(bar.handle_event(key(KeyCode::Esc), &mut cx()), None);
        assert!(!bar.is_open());
    }
}
