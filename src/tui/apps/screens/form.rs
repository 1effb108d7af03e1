use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{Element, LayoutConstraint, Subscription, TextField, Theme};

/// Static description of one form step
#[derive(Debug)]
pub struct FormSpec {
    pub title: &'static str,
    pub intro: &'static str,
    pub fields: &'static [&'static str],
    /// The first step has nowhere to go back to
    pub allow_back: bool,
}

pub const PERSONAL_DETAILS: FormSpec = FormSpec {
    title: "Personal Details",
    intro: "Tell us who you are.",
    fields: &["Full name", "National ID", "Phone number", "Email"],
    allow_back: false,
};

pub const ADDITIONAL_INFO: FormSpec = FormSpec {
    title: "Additional Info",
    intro: "A little about your income and where you live.",
    fields: &["Employer", "Monthly income (KES)", "Residence"],
    allow_back: true,
};

pub const GUARANTORS: FormSpec = FormSpec {
    title: "Guarantors",
    intro: "Two people who can vouch for you.",
    fields: &["Guarantor 1 name", "Guarantor 1 phone", "Guarantor 2 name", "Guarantor 2 phone"],
    allow_back: true,
};

pub const PAYMENT: FormSpec = FormSpec {
    title: "Payment",
    intro: "Pay the savings deposit to release your loan.",
    fields: &["M-Pesa phone number"],
    allow_back: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editing key for the focused field
    Input(KeyCode),
    FocusNext,
    FocusPrevious,
    /// Enter: next field, or submit from the last one
    Submit,
    Next,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Next,
    Back,
}

#[derive(Debug, Clone)]
pub struct State {
    spec: &'static FormSpec,
    fields: Vec<TextField>,
    focus: usize,
    /// Read-only label/value lines shown above the inputs
    summary: Vec<(String, String)>,
}

impl State {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            fields: spec.fields.iter().map(|_| TextField::new()).collect(),
            focus: 0,
            summary: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: Vec<(String, String)>) -> Self {
        self.summary = summary;
        self
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(TextField::value)
    }

    fn is_last_field(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }
}

pub fn update(state: &mut State, msg: Msg) -> Option<Event> {
    match msg {
        Msg::Input(code) => {
            if let Some(field) = state.fields.get_mut(state.focus) {
                field.handle_key(code);
            }
            None
        }
        Msg::FocusNext => {
            if !state.fields.is_empty() {
                state.focus = (state.focus + 1) % state.fields.len();
            }
            None
        }
        Msg::FocusPrevious => {
            if !state.fields.is_empty() {
                state.focus = (state.focus + state.fields.len() - 1) % state.fields.len();
            }
            None
        }
        Msg::Submit => {
            if state.is_last_field() {
                Some(Event::Next)
            } else {
                state.focus += 1;
                None
            }
        }
        Msg::Next => Some(Event::Next),
        Msg::Back => state.spec.allow_back.then_some(Event::Back),
    }
}

/// Map raw keys that no binding claimed onto field edits
fn editing_key(event: KeyEvent) -> Option<Msg> {
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match event.code {
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End => Some(Msg::Input(event.code)),
        _ => None,
    }
}

pub fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
    let mut subs = vec![
        Subscription::keyboard(KeyCode::Tab, "Next field", Msg::FocusNext),
        Subscription::keyboard(KeyCode::BackTab, "", Msg::FocusPrevious),
        Subscription::keyboard(KeyCode::Down, "", Msg::FocusNext),
        Subscription::keyboard(KeyCode::Up, "", Msg::FocusPrevious),
        Subscription::keyboard(KeyCode::Enter, "Submit", Msg::Submit),
        Subscription::ctrl_key(KeyCode::Char('n'), "Continue", Msg::Next),
    ];
    if state.spec.allow_back {
        subs.push(Subscription::keyboard(KeyCode::Esc, "Back", Msg::Back));
    }
    subs.push(Subscription::keys(editing_key));
    subs
}

pub fn view(state: &State, theme: &Theme) -> Element<Msg> {
    let mut content = ColumnBuilder::new().add(
        Element::styled(state.spec.intro, theme.muted_style()),
        LayoutConstraint::Length(1),
    );

    if !state.summary.is_empty() {
        let lines = state
            .summary
            .iter()
            .map(|(label, value)| {
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{:<18}", label), theme.muted_style()),
                    Span::styled(value.clone(), theme.heading_style()),
                ]))
            })
            .collect();
        content = content.add(
            Element::panel(Element::container(Element::column(lines).build()).padding(1).build())
                .border_style(theme.accent_style())
                .build(),
            LayoutConstraint::Length(state.summary.len() as u16 + 4),
        );
    }

    for (index, (label, field)) in state.spec.fields.iter().zip(&state.fields).enumerate() {
        content = content.add(
            Element::text_input(*label, field.value(), field.cursor_pos(), index == state.focus),
            LayoutConstraint::Length(3),
        );
    }

    let mut buttons = RowBuilder::new();
    if state.spec.allow_back {
        buttons = buttons.add(Element::button("← Back", Msg::Back), LayoutConstraint::Length(14));
    }
    buttons = buttons
        .add(Element::None, LayoutConstraint::Fill(1))
        .add(Element::primary_button("Next →", Msg::Next), LayoutConstraint::Length(14));

    let body = content
        .add(buttons.build(), LayoutConstraint::Length(3))
        .add(Element::None, LayoutConstraint::Fill(1))
        .spacing(1)
        .build();

    Element::panel(Element::container(body).padding(1).build())
        .title(state.spec.title)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            update(state, Msg::Input(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_walks_fields_then_submits() {
        let mut state = State::new(&ADDITIONAL_INFO);
        assert_eq!(update(&mut state, Msg::Submit), None);
        assert_eq!(update(&mut state, Msg::Submit), None);
        assert_eq!(state.focus(), 2);
        assert_eq!(update(&mut state, Msg::Submit), Some(Event::Next));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = State::new(&PERSONAL_DETAILS);
        type_text(&mut state, "Wanjiru");
        update(&mut state, Msg::FocusNext);
        type_text(&mut state, "12345678");
        update(&mut state, Msg::Input(KeyCode::Backspace));

        assert_eq!(state.value(0), Some("Wanjiru"));
        assert_eq!(state.value(1), Some("1234567"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = State::new(&GUARANTORS);
        update(&mut state, Msg::FocusPrevious);
        assert_eq!(state.focus(), 3);
        update(&mut state, Msg::FocusNext);
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn test_first_step_has_no_back() {
        let mut state = State::new(&PERSONAL_DETAILS);
        assert_eq!(update(&mut state, Msg::Back), None);

        let mut state = State::new(&PAYMENT);
        assert_eq!(update(&mut state, Msg::Back), Some(Event::Back));
        assert_eq!(update(&mut state, Msg::Next), Some(Event::Next));
    }

    #[test]
    fn test_editing_key_ignores_control_chords() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let chord = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(editing_key(plain), Some(Msg::Input(KeyCode::Char('q'))));
        assert_eq!(editing_key(chord), None);
        assert_eq!(editing_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)), None);
    }
}
