use crossterm::event::KeyCode;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::time::Duration;

use super::loading_screen::{LOADING_MESSAGES, SPINNER_FRAMES};
use crate::config::Timings;
use crate::loan::currency::format_kes_cents;
use crate::loan::{INTEREST_RATE_PERCENT, LOAN_TIERS, LoanQuote, LoanTier, format_kes, sample_qualifying_amount};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{Element, LayoutConstraint, ListItem, Subscription, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Select(usize),
    SelectNext,
    SelectPrevious,
    /// Offer loading timer elapsed
    NextMessage,
    Spin,
    Continue,
    Back,
}

/// Signals for the owner of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Continue { amount: u64, savings_deposit: u64 },
    Back,
}

#[derive(Debug, Clone)]
pub struct State {
    /// Mount generation, scopes this screen's timer keys
    mount: u64,
    selected_amount: u64,
    loading_step: usize,
    qualifying_amount: Option<u64>,
    spinner_state: usize,
    step_duration: Duration,
    spinner_frame: Duration,
}

impl State {
    pub fn new(mount: u64, timings: &Timings) -> Self {
        Self {
            mount,
            selected_amount: LoanTier::first().amount,
            loading_step: 0,
            qualifying_amount: None,
            spinner_state: 0,
            step_duration: timings.offer_step(),
            spinner_frame: timings.spinner_frame(),
        }
    }

    pub fn selected_tier(&self) -> LoanTier {
        LoanTier::resolve(self.selected_amount)
    }

    pub fn selected_index(&self) -> usize {
        LoanTier::index_of(self.selected_amount).unwrap_or(0)
    }

    pub fn quote(&self) -> LoanQuote {
        LoanQuote::for_tier(self.selected_tier())
    }

    pub fn qualifying_amount(&self) -> Option<u64> {
        self.qualifying_amount
    }

    pub fn loading_step(&self) -> usize {
        self.loading_step
    }

    pub fn is_loading(&self) -> bool {
        self.loading_step < LOADING_MESSAGES.len()
    }

    fn select_index(&mut self, index: usize) {
        if let Some(tier) = LOAN_TIERS.get(index) {
            self.selected_amount = tier.amount;
        }
    }
}

pub fn update(state: &mut State, msg: Msg) -> Option<Event> {
    match msg {
        Msg::Select(index) => {
            state.select_index(index);
            None
        }
        Msg::SelectNext => {
            let next = (state.selected_index() + 1).min(LOAN_TIERS.len() - 1);
            state.select_index(next);
            None
        }
        Msg::SelectPrevious => {
            let previous = state.selected_index().saturating_sub(1);
            state.select_index(previous);
            None
        }
        Msg::NextMessage => {
            if state.is_loading() {
                state.loading_step += 1;
                if !state.is_loading() && state.qualifying_amount.is_none() {
                    let amount = sample_qualifying_amount(&mut rand::thread_rng());
                    log::info!("Qualifying amount revealed: {}", amount);
                    state.qualifying_amount = Some(amount);
                }
            }
            None
        }
        Msg::Spin => {
            state.spinner_state = (state.spinner_state + 1) % SPINNER_FRAMES.len();
            None
        }
        Msg::Continue => {
            let tier = state.selected_tier();
            log::info!("Offer accepted: {} with deposit {}", tier.amount, tier.savings_deposit);
            Some(Event::Continue {
                amount: tier.amount,
                savings_deposit: tier.savings_deposit,
            })
        }
        Msg::Back => Some(Event::Back),
    }
}

pub fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
    let mut subs = vec![
        Subscription::keyboard(KeyCode::Up, "Previous", Msg::SelectPrevious),
        Subscription::keyboard(KeyCode::Down, "Next", Msg::SelectNext),
        Subscription::keyboard(KeyCode::Char('k'), "", Msg::SelectPrevious),
        Subscription::keyboard(KeyCode::Char('j'), "", Msg::SelectNext),
        Subscription::keyboard(KeyCode::Enter, "Continue", Msg::Continue),
        Subscription::keyboard(KeyCode::Char('c'), "", Msg::Continue),
        Subscription::keyboard(KeyCode::Esc, "Back", Msg::Back),
        Subscription::keyboard(KeyCode::Char('b'), "", Msg::Back),
    ];

    for (index, digit) in ('1'..='9').enumerate().take(LOAN_TIERS.len()) {
        subs.push(Subscription::keyboard(KeyCode::Char(digit), "", Msg::Select(index)));
    }

    if state.is_loading() {
        subs.push(Subscription::after(
            format!("offer/{}/step/{}", state.mount, state.loading_step),
            state.step_duration,
            Msg::NextMessage,
        ));
        subs.push(Subscription::timer(
            format!("offer/{}/spinner", state.mount),
            state.spinner_frame,
            Msg::Spin,
        ));
    }

    subs
}

pub fn view(state: &State, theme: &Theme) -> Element<Msg> {
    let quote = state.quote();

    let left = ColumnBuilder::new()
        .add(qualifying_panel(state, theme), LayoutConstraint::Length(6))
        .add(tier_list(state, theme), LayoutConstraint::Fill(1))
        .spacing(1)
        .build();

    let right = ColumnBuilder::new()
        .add(summary_panel(&quote, theme), LayoutConstraint::Length(9))
        .add(
            RowBuilder::new()
                .add(Element::button("← Back", Msg::Back), LayoutConstraint::Fill(1))
                .add(Element::primary_button("Continue →", Msg::Continue), LayoutConstraint::Fill(2))
                .build(),
            LayoutConstraint::Length(3),
        )
        .add(Element::None, LayoutConstraint::Fill(1))
        .spacing(1)
        .build();

    let body = RowBuilder::new()
        .add(left, LayoutConstraint::Fill(1))
        .add(right, LayoutConstraint::Fill(1))
        .spacing(2)
        .build();

    Element::panel(Element::container(body).padding(1).build())
        .title("Select Loan Amount")
        .build()
}

fn qualifying_panel(state: &State, theme: &Theme) -> Element<Msg> {
    let content = match state.qualifying_amount {
        Some(amount) if !state.is_loading() => Element::column(vec![
            Element::styled_text(Line::from(vec![
                Span::styled("Qualifying Amount  ", theme.accent_style()),
                Span::styled(format_kes(amount), theme.accent_style().bold()),
            ])),
            Element::styled("This is your qualifying loan amount based on our assessment", theme.muted_style()),
        ])
        .build(),
        _ => {
            let message = LOADING_MESSAGES[state.loading_step.min(LOADING_MESSAGES.len() - 1)];
            Element::styled_text(Line::from(vec![
                Span::styled(SPINNER_FRAMES[state.spinner_state], theme.accent_style().bold()),
                Span::raw(" "),
                Span::styled(message, theme.accent_style()),
            ]))
        }
    };

    Element::panel(Element::container(content).padding(1).build())
        .border_style(theme.accent_style())
        .build()
}

fn tier_list(state: &State, theme: &Theme) -> Element<Msg> {
    let selected = state.selected_index();
    let items = LOAN_TIERS
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let amount_style = if index == selected {
                theme.accent_style().bold()
            } else {
                Style::default().fg(theme.text)
            };
            let row = Element::column(vec![
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", index + 1), theme.muted_style()),
                    Span::styled(format_kes(tier.amount), amount_style),
                ])),
                Element::styled(
                    format!("  Savings Deposit: {}", format_kes(tier.savings_deposit)),
                    theme.muted_style(),
                ),
            ])
            .build();
            ListItem::new(row, 2).on_click(Msg::Select(index))
        })
        .collect();

    Element::list(items, Some(selected))
}

fn summary_panel(quote: &LoanQuote, theme: &Theme) -> Element<Msg> {
    let line = |label: String, value: String, style: Style| {
        Element::styled_text(Line::from(vec![
            Span::styled(format!("{:<18}", label), theme.muted_style()),
            Span::styled(value, style),
        ]))
    };
    let value_style = Style::default().fg(theme.text);

    let content = Element::column(vec![
        line("Loan Amount".to_string(), format_kes(quote.amount), value_style),
        line(format!("Interest ({}%)", INTEREST_RATE_PERCENT), format_kes_cents(quote.interest_cents), value_style),
        line("Savings Deposit".to_string(), format_kes(quote.savings_deposit), value_style),
        Element::styled("─".repeat(32), theme.muted_style()),
        line("Total to Repay".to_string(), format_kes_cents(quote.total_repayment_cents), theme.heading_style()),
    ])
    .build();

    Element::panel(Element::container(content).padding(1).build())
        .title("Loan Summary")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(4, &Timings::default())
    }

    #[test]
    fn test_defaults_to_first_tier() {
        let state = state();
        assert_eq!(state.selected_tier(), LOAN_TIERS[0]);
        assert_eq!(state.qualifying_amount(), None);
    }

    #[test]
    fn test_select_ten_thousand_and_continue() {
        let mut state = state();
        update(&mut state, Msg::Select(3));

        let quote = state.quote();
        assert_eq!(quote.interest_cents, 100_000);
        assert_eq!(quote.total_repayment_cents, 1_100_000);
        assert_eq!(
            update(&mut state, Msg::Continue),
            Some(Event::Continue { amount: 10_000, savings_deposit: 300 })
        );
    }

    #[test]
    fn test_keyboard_selection_clamps_at_ends() {
        let mut state = state();
        update(&mut state, Msg::SelectPrevious);
        assert_eq!(state.selected_index(), 0);

        for _ in 0..20 {
            update(&mut state, Msg::SelectNext);
        }
        assert_eq!(state.selected_tier().amount, 25_000);

        update(&mut state, Msg::Select(42));
        assert_eq!(state.selected_tier().amount, 25_000);
    }

    #[test]
    fn test_qualifying_amount_revealed_after_loading() {
        let mut state = state();
        update(&mut state, Msg::NextMessage);
        update(&mut state, Msg::NextMessage);
        assert_eq!(state.qualifying_amount(), None);

        update(&mut state, Msg::NextMessage);
        let amount = state.qualifying_amount().unwrap();
        assert!(LoanTier::find(amount).is_some());

        // Extra ticks do not resample
        update(&mut state, Msg::NextMessage);
        assert_eq!(state.qualifying_amount(), Some(amount));
    }

    #[test]
    fn test_continue_ignores_qualifying_amount() {
        let mut state = state();
        for _ in 0..3 {
            update(&mut state, Msg::NextMessage);
        }
        update(&mut state, Msg::Select(8));
        assert_eq!(
            update(&mut state, Msg::Continue),
            Some(Event::Continue { amount: 25_000, savings_deposit: 550 })
        );
    }

    #[test]
    fn test_loading_timer_key_is_scoped_to_mount() {
        let state = state();
        let keys: Vec<String> = subscriptions(&state)
            .into_iter()
            .filter_map(|sub| match sub {
                Subscription::After { key, .. } => Some(key.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["offer/4/step/0"]);
    }
}
