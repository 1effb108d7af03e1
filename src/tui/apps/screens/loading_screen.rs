use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::time::Duration;

use crate::config::Timings;
use crate::tui::element::ColumnBuilder;
use crate::tui::{Element, LayoutConstraint, Subscription, Theme};

/// Status lines shown while the application is "processed"
pub const LOADING_MESSAGES: [&str; 3] = [
    "Contacting servers...",
    "Checking loan limits...",
    "Submitting...",
];

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Step timer elapsed, show the next message
    NextMessage,
    /// Final pause elapsed
    Finish,
    Spin,
}

/// Signals for the owner of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Complete,
}

#[derive(Debug, Clone)]
pub struct State {
    /// Mount generation, scopes this screen's timer keys
    mount: u64,
    step: usize,
    completed: bool,
    spinner_state: usize,
    step_duration: Duration,
    done_delay: Duration,
    spinner_frame: Duration,
}

impl State {
    pub fn new(mount: u64, timings: &Timings) -> Self {
        Self {
            mount,
            step: 0,
            completed: false,
            spinner_state: 0,
            step_duration: timings.loading_step(LOADING_MESSAGES.len()),
            done_delay: timings.loading_done_delay(),
            spinner_frame: timings.spinner_frame(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step >= LOADING_MESSAGES.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Message for the current step; the last one stays up during the final pause
    pub fn current_message(&self) -> &'static str {
        LOADING_MESSAGES[self.step.min(LOADING_MESSAGES.len() - 1)]
    }

    pub fn step_timer_key(&self) -> String {
        format!("loading/{}/step/{}", self.mount, self.step)
    }

    pub fn done_timer_key(&self) -> String {
        format!("loading/{}/done", self.mount)
    }
}

pub fn update(state: &mut State, msg: Msg) -> Option<Event> {
    match msg {
        Msg::NextMessage => {
            if !state.is_done() {
                state.step += 1;
                log::debug!("Loading screen step {}/{}", state.step, LOADING_MESSAGES.len());
            }
            None
        }
        Msg::Finish => {
            if state.is_done() && !state.completed {
                state.completed = true;
                log::info!("Loading screen complete");
                Some(Event::Complete)
            } else {
                None
            }
        }
        Msg::Spin => {
            state.spinner_state = (state.spinner_state + 1) % SPINNER_FRAMES.len();
            None
        }
    }
}

pub fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
    let mut subs = Vec::new();

    if !state.is_done() {
        subs.push(Subscription::after(state.step_timer_key(), state.step_duration, Msg::NextMessage));
    } else if !state.completed {
        subs.push(Subscription::after(state.done_timer_key(), state.done_delay, Msg::Finish));
    }

    if !state.completed {
        subs.push(Subscription::timer(
            format!("loading/{}/spinner", state.mount),
            state.spinner_frame,
            Msg::Spin,
        ));
    }

    subs
}

pub fn view(state: &State, theme: &Theme) -> Element<Msg> {
    let spinner = SPINNER_FRAMES[state.spinner_state];

    let content = ColumnBuilder::new()
        .add(Element::None, LayoutConstraint::Fill(1))
        .add(
            Element::styled_text(Line::from(vec![
                Span::styled(spinner, Style::default().fg(theme.green).bold()),
                Span::raw("  "),
                Span::styled(state.current_message(), Style::default().fg(theme.green).bold()),
            ])),
            LayoutConstraint::Length(1),
        )
        .add(Element::None, LayoutConstraint::Length(1))
        .add(
            Element::styled("Please wait while we process your request...", theme.muted_style()),
            LayoutConstraint::Length(1),
        )
        .add(Element::None, LayoutConstraint::Fill(1))
        .build();

    Element::panel(Element::container(content).padding(4).build())
        .title("Processing")
        .border_style(theme.success_style())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::timers::{TimerSet, TimerSpec};
    use std::time::Instant;

    fn state() -> State {
        State::new(1, &Timings::default())
    }

    #[test]
    fn test_walks_messages_then_completes_once() {
        let mut state = state();
        assert_eq!(state.current_message(), "Contacting servers...");

        for _ in 0..LOADING_MESSAGES.len() {
            assert_eq!(update(&mut state, Msg::NextMessage), None);
        }
        assert!(state.is_done());
        assert_eq!(state.current_message(), "Submitting...");

        assert_eq!(update(&mut state, Msg::Finish), Some(Event::Complete));
        assert_eq!(update(&mut state, Msg::Finish), None);
        assert!(state.is_completed());
    }

    #[test]
    fn test_finish_before_done_is_ignored() {
        let mut state = state();
        update(&mut state, Msg::NextMessage);
        assert_eq!(update(&mut state, Msg::Finish), None);
        assert!(!state.is_completed());
    }

    #[test]
    fn test_subscriptions_follow_progress() {
        let mut state = state();
        let keys = |state: &State| -> Vec<String> {
            subscriptions(state)
                .into_iter()
                .filter_map(|sub| match sub {
                    Subscription::After { key, delay, .. } => Some(format!("{}@{}", key, delay.as_millis())),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(keys(&state), vec!["loading/1/step/0@5000"]);
        for _ in 0..3 {
            update(&mut state, Msg::NextMessage);
        }
        assert_eq!(keys(&state), vec!["loading/1/done@600"]);

        update(&mut state, Msg::Finish);
        assert!(subscriptions(&state).is_empty());
    }

    fn declared_timers(state: &State) -> Vec<TimerSpec<Msg>> {
        subscriptions(state)
            .into_iter()
            .filter_map(|sub| match sub {
                Subscription::After { key, delay, msg } => Some(TimerSpec { key, period: delay, repeat: false, msg }),
                Subscription::Timer { key, interval, msg } => Some(TimerSpec { key, period: interval, repeat: true, msg }),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_unmount_mid_sequence_never_completes() {
        let start = Instant::now();
        let mut state = state();
        let mut timers = TimerSet::new();
        timers.reconcile(declared_timers(&state), start);

        let mut now = start;
        let mut completions = 0;
        while now < start + Duration::from_secs(6) {
            now += Duration::from_millis(100);
            while let Some(msg) = timers.pop_due(now) {
                if update(&mut state, msg).is_some() {
                    completions += 1;
                }
                timers.reconcile(declared_timers(&state), now);
            }
        }
        assert_eq!(state.step(), 1);

        // The owner stops rendering the screen
        timers.reconcile(Vec::new(), now);
        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(now + Duration::from_secs(60)), None);
        assert_eq!(completions, 0);
        assert!(!state.is_completed());
    }
}
