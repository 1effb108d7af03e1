use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use std::time::Instant;

use crate::tui::subscription::KeyBinding;
use crate::tui::timers::{TimerSet, TimerSpec};
use crate::tui::{App, Command, InteractionRegistry, Renderer, RuntimeConfig, Subscription};

/// Boxed catch-all key handler declared through [`Subscription::Keys`]
type KeyHandler<Msg> = Box<dyn Fn(KeyEvent) -> Option<Msg> + Send>;

/// The runtime manages app state, event routing, timers and command execution
pub struct Runtime<A: App> {
    /// Current app state
    state: A::State,

    /// Runtime configuration (theme)
    config: RuntimeConfig,

    /// Interaction registry for mouse events
    registry: InteractionRegistry<A::Msg>,

    /// Keyboard subscriptions, in declaration order
    key_bindings: Vec<(KeyBinding, A::Msg, String)>,

    /// Catch-all key handlers
    key_handlers: Vec<KeyHandler<A::Msg>>,

    /// Declared timers
    timers: TimerSet<A::Msg>,

    /// Time of the most recent poll; new timers are armed relative to it
    clock: Instant,

    /// Set once a Quit command ran
    quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::InitParams, config: RuntimeConfig) -> Self {
        Self::with_clock(params, config, Instant::now())
    }

    /// Create a runtime whose clock starts at `now` (tests drive time explicitly)
    pub fn with_clock(params: A::InitParams, config: RuntimeConfig, now: Instant) -> Self {
        let (state, init_command) = A::init(params);

        let mut runtime = Self {
            state,
            config,
            registry: InteractionRegistry::new(),
            key_bindings: Vec::new(),
            key_handlers: Vec::new(),
            timers: TimerSet::new(),
            clock: now,
            quit: false,
        };

        // Initialize subscriptions
        runtime.update_subscriptions();

        // Execute init command
        if let Err(e) = runtime.execute_command(init_command) {
            log::error!("Init command for {} failed: {}", A::title(), e);
        }

        runtime
    }

    /// Get a reference to the app's state
    pub fn get_state(&self) -> &A::State {
        &self.state
    }

    /// Get the app's title (static string)
    pub fn get_title(&self) -> &'static str {
        A::title()
    }

    /// Get the app's status (optional, dynamic)
    pub fn get_status(&self) -> Option<Line<'static>> {
        A::status(&self.state, &self.config.theme)
    }

    /// Get keyboard bindings for the footer
    pub fn get_key_bindings(&self) -> Vec<(KeyBinding, String)> {
        self.key_bindings
            .iter()
            .filter(|(_, _, description)| !description.is_empty())
            .map(|(key, _, description)| (*key, description.clone()))
            .collect()
    }

    pub fn clock(&self) -> Instant {
        self.clock
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    pub fn is_timer_armed(&self, key: &str) -> bool {
        self.timers.is_armed(key)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Fire every timer that is due at `now`, in deadline order
    pub fn poll_timers(&mut self, now: Instant) -> Result<bool> {
        self.clock = self.clock.max(now);

        while let Some(msg) = self.timers.pop_due(self.clock) {
            if !self.dispatch(msg)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Send a message through update(), as if an input produced it
    pub fn dispatch(&mut self, msg: A::Msg) -> Result<bool> {
        let command = A::update(&mut self.state, msg);
        let keep_running = self.execute_command(command)?;
        self.update_subscriptions();
        Ok(keep_running)
    }

    /// Update subscriptions based on current state
    fn update_subscriptions(&mut self) {
        self.key_bindings.clear();
        self.key_handlers.clear();

        let mut declared_timers = Vec::new();
        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard { key, msg, description } => {
                    self.key_bindings.push((key, msg, description));
                }
                Subscription::Keys { handler } => {
                    self.key_handlers.push(handler);
                }
                Subscription::Timer { key, interval, msg } => {
                    declared_timers.push(TimerSpec { key, period: interval, repeat: true, msg });
                }
                Subscription::After { key, delay, msg } => {
                    declared_timers.push(TimerSpec { key, period: delay, repeat: false, msg });
                }
            }
        }

        self.timers.reconcile(declared_timers, self.clock);
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        let bound = self
            .key_bindings
            .iter()
            .find(|(key, _, _)| key.matches(&key_event))
            .map(|(_, msg, _)| msg.clone());
        if let Some(msg) = bound {
            return self.dispatch(msg);
        }

        // No binding claimed it, offer it to the catch-all handlers
        let captured = self.key_handlers.iter().find_map(|handler| handler(key_event));
        if let Some(msg) = captured {
            return self.dispatch(msg);
        }

        Ok(true)
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            if let Some(msg) = self.registry.find_click(mouse_event.column, mouse_event.row) {
                return self.dispatch(msg);
            }
        }
        Ok(true)
    }

    /// Execute a command
    fn execute_command(&mut self, command: Command<A::Msg>) -> Result<bool> {
        match command {
            Command::None => Ok(true),

            Command::Batch(commands) => {
                for cmd in commands {
                    if !self.execute_command(cmd)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Command::Quit => {
                log::info!("{} requested quit", A::title());
                self.quit = true;
                Ok(false)
            }
        }
    }

    /// Render the app to the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_to_area(frame, area);
    }

    /// Render the app with a key-hint footer
    pub fn render_to_area(&mut self, frame: &mut Frame, area: Rect) {
        // Clear registry for this frame
        self.registry.clear();

        let [body, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let view = A::view(&mut self.state, &self.config.theme);
        Renderer::render(frame, &self.config.theme, &mut self.registry, &view, body);

        frame.render_widget(self.footer_line(), footer);
    }

    fn footer_line(&self) -> Line<'static> {
        let theme = &self.config.theme;
        let mut spans = Vec::new();
        if let Some(status) = self.get_status() {
            spans.extend(status.spans);
            spans.push(Span::raw("  "));
        }
        for (key, description) in self.get_key_bindings() {
            spans.push(Span::styled(format!(" {} ", key), theme.accent_style()));
            spans.push(Span::styled(format!("{} ", description), theme.muted_style()));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{Element, Theme};
    use std::time::Duration;

    struct Counter;

    #[derive(Clone)]
    enum Msg {
        Bump,
        BumpThenQuit,
    }

    impl App for Counter {
        type State = u32;
        type Msg = Msg;
        type InitParams = ();

        fn init(_params: ()) -> (u32, Command<Msg>) {
            (0, Command::None)
        }

        fn update(state: &mut u32, msg: Msg) -> Command<Msg> {
            *state += 1;
            match msg {
                Msg::Bump => Command::None,
                Msg::BumpThenQuit => Command::batch(vec![Command::None, Command::quit(), Command::None]),
            }
        }

        fn view(_state: &mut u32, _theme: &Theme) -> Element<Msg> {
            Element::None
        }

        fn subscriptions(state: &u32) -> Vec<Subscription<Msg>> {
            if *state < 2 {
                vec![Subscription::timer("bump", Duration::from_millis(10), Msg::Bump)]
            } else {
                Vec::new()
            }
        }

        fn title() -> &'static str {
            "Counter"
        }
    }

    #[test]
    fn test_batch_stops_at_quit() {
        let mut runtime = Runtime::<Counter>::with_clock((), RuntimeConfig::default(), Instant::now());
        assert!(!runtime.dispatch(Msg::BumpThenQuit).unwrap());
        assert!(runtime.has_quit());
        assert_eq!(*runtime.get_state(), 1);
    }

    #[test]
    fn test_timer_dropped_from_subscriptions_stops_firing() {
        let start = Instant::now();
        let mut runtime = Runtime::<Counter>::with_clock((), RuntimeConfig::default(), start);
        assert!(runtime.is_timer_armed("bump"));

        runtime.poll_timers(start + Duration::from_millis(10)).unwrap();
        assert_eq!(*runtime.get_state(), 1);
        runtime.poll_timers(start + Duration::from_millis(20)).unwrap();
        assert_eq!(*runtime.get_state(), 2);
        assert!(!runtime.is_timer_armed("bump"));

        runtime.poll_timers(start + Duration::from_secs(5)).unwrap();
        assert_eq!(*runtime.get_state(), 2);
    }
}
