use crossterm::event::KeyCode;
use ratatui::prelude::Stylize;
use ratatui::text::{Line, Span};

use super::StepEvent;
use crate::loan::currency::format_kes_cents;
use crate::loan::{LoanQuote, format_kes};
use crate::tui::element::ColumnBuilder;
use crate::tui::{Element, LayoutConstraint, Subscription, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Back,
}

#[derive(Debug, Clone)]
pub struct State {
    amount: u64,
    savings_fee: u64,
}

impl State {
    pub fn new(amount: u64, savings_fee: u64) -> Self {
        Self { amount, savings_fee }
    }
}

pub fn update(_state: &mut State, msg: Msg) -> Option<StepEvent> {
    match msg {
        Msg::Back => Some(StepEvent::Back),
    }
}

pub fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
    vec![Subscription::keyboard(KeyCode::Esc, "Back", Msg::Back)]
}

pub fn view(state: &State, theme: &Theme) -> Element<Msg> {
    let row = |label: &str, value: String| {
        Element::styled_text(Line::from(vec![
            Span::styled(format!("{:<18}", label), theme.muted_style()),
            Span::styled(value, theme.heading_style()),
        ]))
    };

    let mut content = ColumnBuilder::new()
        .add(
            Element::styled_text(Line::from(Span::styled(
                "✓ Application submitted",
                theme.success_style().bold(),
            ))),
            LayoutConstraint::Length(1),
        )
        .add(Element::None, LayoutConstraint::Length(1))
        .add(row("Loan Amount", format_kes(state.amount)), LayoutConstraint::Length(1))
        .add(row("Savings Deposit", format_kes(state.savings_fee)), LayoutConstraint::Length(1));

    if let Some(quote) = LoanQuote::for_amount(state.amount) {
        content = content.add(
            row("Total to Repay", format_kes_cents(quote.total_repayment_cents)),
            LayoutConstraint::Length(1),
        );
    }

    let body = content
        .add(Element::None, LayoutConstraint::Length(1))
        .add(
            Element::styled("You will receive an SMS once your loan is disbursed.", theme.muted_style()),
            LayoutConstraint::Length(1),
        )
        .add(Element::None, LayoutConstraint::Fill(1))
        .build();

    Element::panel(Element::container(body).padding(2).build())
        .title("Confirmation")
        .border_style(theme.success_style())
        .build()
}
