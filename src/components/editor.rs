//! Car list editor - the main screen
//!
//! Owns the car list, the draft inputs and focus. State changes replace the
//! whole `EditorState`; the event loop redraws after every action chain.

use crate::action::Action;
use crate::component::Component;
use crate::components::car_list::{render_car_list, row_to_index};
use crate::components::draft_form::{
    render_add_button, render_input, year_accepts, BRAND_PLACEHOLDER, NAME_PLACEHOLDER,
};
use crate::components::layout::{calculate_editor_layout, contains, EditorLayout};
use crate::model::{Clock, EditorState, Focus, SystemClock};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

/// The car list editor component
pub struct CarListEditor {
    state: EditorState,
    clock: Box<dyn Clock>,
    pub focus: Focus,
    pub list_state: ListState,
    /// Geometry of the last draw, used to resolve mouse clicks
    layout: Option<EditorLayout>,
}

impl Default for CarListEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CarListEditor {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            state: EditorState::new(clock.as_ref()),
            clock,
            focus: Focus::default(),
            list_state: ListState::default(),
            layout: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[cfg(test)]
    pub fn last_layout(&self) -> Option<&EditorLayout> {
        self.layout.as_ref()
    }

    /// Swap in the state produced by `f`, which also gets the editor's clock
    fn replace_state(&mut self, f: impl FnOnce(EditorState, &dyn Clock) -> EditorState) {
        let old = std::mem::take(&mut self.state);
        self.state = f(old, self.clock.as_ref());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::List && self.list_state.selected().is_none() && !self.state.cars.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Keep the highlight on an existing entry after the list shrinks
    fn clamp_selection(&mut self) {
        let len = self.state.cars.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.state.cars.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        let len = self.state.cars.len();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    /// Current text of the focused input
    fn focused_value(&self) -> &str {
        let draft = &self.state.draft;
        match self.focus {
            Focus::Year => &draft.year,
            Focus::Brand => &draft.brand,
            Focus::Name => &draft.name,
            Focus::AddButton | Focus::List => "",
        }
    }

    /// Action replacing the focused input's text with `value`
    fn change_focused(&self, value: String) -> Option<Action> {
        match self.focus {
            Focus::Year => Some(Action::ChangeYear(value)),
            Focus::Brand => Some(Action::ChangeBrand(value)),
            Focus::Name => Some(Action::ChangeName(value)),
            Focus::AddButton | Focus::List => None,
        }
    }

    fn handle_input_key(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Enter => Some(Action::AddCar),
            KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Backspace => {
                let mut value = self.focused_value().to_string();
                value.pop()?;
                self.change_focused(value)
            }
            KeyCode::Char('u') if ctrl => {
                if self.focused_value().is_empty() {
                    None
                } else {
                    self.change_focused(String::new())
                }
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                let current = self.focused_value();
                if self.focus == Focus::Year && !year_accepts(current, c) {
                    return None;
                }
                self.change_focused(format!("{}{}", current, c))
            }
            _ => None,
        }
    }

    fn handle_list_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextItem),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevItem),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('d') => {
                Some(Action::RemoveSelected)
            }
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn handle_button_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::AddCar),
            KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        }
    }
}

impl Component for CarListEditor {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Keys that work regardless of focus
        let global = match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            _ => None,
        };
        if global.is_some() {
            return Ok(global);
        }

        let action = match self.focus {
            focus if focus.is_input() => self.handle_input_key(key),
            Focus::AddButton => self.handle_button_key(key),
            _ => self.handle_list_key(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let Some(layout) = self.layout else {
            return Ok(None);
        };
        let (column, row) = (mouse.column, mouse.row);

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(layout.list, column, row) {
                    row_to_index(layout.list, self.list_state.offset(), row, self.state.cars.len())
                        .map(Action::RemoveCar)
                } else if contains(layout.add_button, column, row) {
                    Some(Action::AddCar)
                } else if contains(layout.year, column, row) {
                    Some(Action::SetFocus(Focus::Year))
                } else if contains(layout.brand, column, row) {
                    Some(Action::SetFocus(Focus::Brand))
                } else if contains(layout.name, column, row) {
                    Some(Action::SetFocus(Focus::Name))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollDown if contains(layout.list, column, row) => Some(Action::NextItem),
            MouseEventKind::ScrollUp if contains(layout.list, column, row) => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
            Action::SetFocus(focus) => self.set_focus(focus),

            Action::NextItem => self.select_next(),
            Action::PrevItem => self.select_prev(),
            Action::FirstItem => {
                if !self.state.cars.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            Action::LastItem => {
                if !self.state.cars.is_empty() {
                    self.list_state.select(Some(self.state.cars.len() - 1));
                }
            }

            Action::AddCar => self.replace_state(|state, clock| state.add_car(clock)),
            Action::RemoveCar(index) => {
                self.replace_state(|state, _| state.remove_car(index));
                self.clamp_selection();
            }
            Action::RemoveCarById(id) => {
                self.replace_state(|state, _| state.remove_car_by_id(id));
                self.clamp_selection();
            }
            // Resolved to an id at dispatch time
            Action::RemoveSelected => {
                if let Some(id) = self.list_state.selected().and_then(|i| self.state.cars.id_at(i)) {
                    return Ok(Some(Action::RemoveCarById(id)));
                }
            }

            Action::ChangeYear(value) => self.replace_state(|state, _| state.change_year(value)),
            Action::ChangeBrand(value) => self.replace_state(|state, _| state.change_brand(value)),
            Action::ChangeName(value) => self.replace_state(|state, _| state.change_name(value)),

            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_editor_layout(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Car List",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        render_car_list(
            frame,
            layout.list,
            &self.state.cars,
            &mut self.list_state,
            self.focus == Focus::List,
        );

        let draft = &self.state.draft;
        render_input(frame, layout.year, "Year", &draft.year, None, self.focus == Focus::Year);
        render_input(
            frame,
            layout.brand,
            "Brand",
            &draft.brand,
            Some(BRAND_PLACEHOLDER),
            self.focus == Focus::Brand,
        );
        render_input(
            frame,
            layout.name,
            "Name",
            &draft.name,
            Some(NAME_PLACEHOLDER),
            self.focus == Focus::Name,
        );
        render_add_button(frame, layout.add_button, self.focus == Focus::AddButton);

        render_help_bar(frame, layout.help, self.focus);

        self.layout = Some(layout);
        Ok(())
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect, focus: Focus) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" Tab ", key),
        Span::styled("Next field  ", text),
    ];
    if focus == Focus::List {
        spans.extend([
            Span::styled(" ↑↓ ", key),
            Span::styled("Select  ", text),
            Span::styled(" Enter/x ", key),
            Span::styled("Remove  ", text),
            Span::styled(" q ", key),
            Span::styled("Quit  ", text),
        ]);
    } else {
        spans.extend([
            Span::styled(" Enter ", key),
            Span::styled("Add car  ", text),
            Span::styled(" Click entry ", key),
            Span::styled("Remove  ", text),
            Span::styled(" Esc ", key),
            Span::styled("Quit  ", text),
        ]);
    }
    spans.extend([Span::styled(" F1 ", key), Span::styled("Help", text)]);

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", focus.label()))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}
