use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};

use super::screens::{
    LoadingEvent, OfferEvent, StepEvent, confirmation, form, loading_screen, loan_offer, stepper,
};
use crate::config::Timings;
use crate::loan::{WizardState, WizardStep, format_kes};
use crate::tui::element::ColumnBuilder;
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme, Transition};

/// Total length of the outgoing fade, in milliseconds
const EXIT_MS: u64 = 300;
/// Total length of the incoming fade, in milliseconds
const ENTER_MS: u64 = 400;

pub struct LoanApplication;

#[derive(Clone)]
pub enum Msg {
    Form(form::Msg),
    Loading(loading_screen::Msg),
    Offer(loan_offer::Msg),
    Confirmation(confirmation::Msg),
    TransitionFrame,
    Quit,
}

/// The screen mounted for the current step
pub enum Screen {
    Form(form::State),
    Loading(loading_screen::State),
    Offer(loan_offer::State),
    Confirmation(confirmation::State),
}

pub struct State {
    wizard: WizardState,
    timings: Timings,
    /// Generation of the mounted screen, bumped on every mount
    mount: u64,
    /// Loan Offer step: false while the loading screen runs
    offer_ready: bool,
    screen: Screen,
    transition: Transition<Msg>,
}

impl State {
    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn mount(&self) -> u64 {
        self.mount
    }

    pub fn offer_ready(&self) -> bool {
        self.offer_ready
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn transition(&self) -> &Transition<Msg> {
        &self.transition
    }

    /// Replace the mounted screen with fresh state for the current step
    fn mount_step(&mut self) {
        self.mount += 1;
        let step = self.wizard.step();
        if step == WizardStep::LoanOffer {
            self.offer_ready = false;
        }

        self.screen = match step {
            WizardStep::PersonalDetails => Screen::Form(form::State::new(&form::PERSONAL_DETAILS)),
            WizardStep::AdditionalInfo => Screen::Form(form::State::new(&form::ADDITIONAL_INFO)),
            WizardStep::Guarantors => Screen::Form(form::State::new(&form::GUARANTORS)),
            WizardStep::LoanOffer => Screen::Loading(loading_screen::State::new(self.mount, &self.timings)),
            WizardStep::Payment => Screen::Form(form::State::new(&form::PAYMENT).with_summary(vec![
                ("Loan Amount".to_string(), format_kes(self.wizard.selected_amount())),
                ("Savings Deposit".to_string(), format_kes(self.wizard.savings_fee())),
            ])),
            WizardStep::Confirmation => Screen::Confirmation(confirmation::State::new(
                self.wizard.selected_amount(),
                self.wizard.savings_fee(),
            )),
        };

        log::debug!("Mounted {:?} screen (mount {})", step, self.mount);
    }

    /// Remount after the wizard moved; a no-op move keeps the current screen
    fn step_changed(&mut self, moved: bool) {
        if moved {
            self.mount_step();
            self.transition.start();
        }
    }

    fn show_offer(&mut self) {
        if self.offer_ready {
            return;
        }
        self.offer_ready = true;
        self.mount += 1;
        self.screen = Screen::Offer(loan_offer::State::new(self.mount, &self.timings));
        log::info!("Loan offer ready (mount {})", self.mount);
    }

    fn on_step_event(&mut self, event: StepEvent) {
        let moved = match event {
            StepEvent::Next => self.wizard.advance(),
            StepEvent::Back => self.wizard.retreat(),
        };
        self.step_changed(moved);
    }
}

impl App for LoanApplication {
    type State = State;
    type Msg = Msg;
    type InitParams = Timings;

    fn init(timings: Timings) -> (State, Command<Msg>) {
        let transition = Transition::new(
            timings.transition_frames(EXIT_MS),
            timings.transition_frames(ENTER_MS),
        );
        let mut state = State {
            wizard: WizardState::new(),
            screen: Screen::Form(form::State::new(&form::PERSONAL_DETAILS)),
            timings,
            mount: 0,
            offer_ready: false,
            transition,
        };
        state.mount_step();
        state.transition.start();
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Form(msg) => {
                if let Screen::Form(screen) = &mut state.screen {
                    if let Some(event) = form::update(screen, msg) {
                        state.on_step_event(event);
                    }
                }
                Command::None
            }
            Msg::Loading(msg) => {
                if let Screen::Loading(screen) = &mut state.screen {
                    if let Some(LoadingEvent::Complete) = loading_screen::update(screen, msg) {
                        state.show_offer();
                    }
                }
                Command::None
            }
            Msg::Offer(msg) => {
                if let Screen::Offer(screen) = &mut state.screen {
                    match loan_offer::update(screen, msg) {
                        Some(OfferEvent::Continue { amount, savings_deposit }) => {
                            let moved = state.wizard.complete_offer(amount, savings_deposit);
                            state.step_changed(moved);
                        }
                        Some(OfferEvent::Back) => state.on_step_event(StepEvent::Back),
                        None => {}
                    }
                }
                Command::None
            }
            Msg::Confirmation(msg) => {
                if let Screen::Confirmation(screen) = &mut state.screen {
                    if let Some(event) = confirmation::update(screen, msg) {
                        state.on_step_event(event);
                    }
                }
                Command::None
            }
            Msg::TransitionFrame => {
                state.transition.tick();
                Command::None
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(state: &mut State, theme: &Theme) -> Element<Msg> {
        let content = match &state.screen {
            Screen::Form(screen) => form::view(screen, theme).map(Msg::Form),
            Screen::Loading(screen) => loading_screen::view(screen, theme).map(Msg::Loading),
            Screen::Offer(screen) => loan_offer::view(screen, theme).map(Msg::Offer),
            Screen::Confirmation(screen) => confirmation::view(screen, theme).map(Msg::Confirmation),
        };
        let content = state.transition.decorate(content);

        let body = ColumnBuilder::new()
            .add(
                stepper::view(&WizardStep::titles(), state.wizard.step_index(), theme),
                LayoutConstraint::Length(1),
            )
            .add(Element::None, LayoutConstraint::Length(1))
            .add(content, LayoutConstraint::Fill(1))
            .build();

        Element::container(body).padding(1).build()
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        let mut subs: Vec<Subscription<Msg>> = match &state.screen {
            Screen::Form(screen) => form::subscriptions(screen)
                .into_iter()
                .map(|sub| sub.map(Msg::Form))
                .collect(),
            Screen::Loading(screen) => loading_screen::subscriptions(screen)
                .into_iter()
                .map(|sub| sub.map(Msg::Loading))
                .collect(),
            Screen::Offer(screen) => loan_offer::subscriptions(screen)
                .into_iter()
                .map(|sub| sub.map(Msg::Offer))
                .collect(),
            Screen::Confirmation(screen) => confirmation::subscriptions(screen)
                .into_iter()
                .map(|sub| sub.map(Msg::Confirmation))
                .collect(),
        };

        if state.transition.is_animating() {
            subs.push(Subscription::timer(
                "transition/frame",
                state.timings.transition_frame(),
                Msg::TransitionFrame,
            ));
        }

        if let Screen::Confirmation(_) = state.screen {
            subs.push(Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit));
            subs.push(Subscription::ctrl_key(KeyCode::Char('c'), "", Msg::Quit));
        } else {
            subs.push(Subscription::ctrl_key(KeyCode::Char('c'), "Quit", Msg::Quit));
        }
        subs.push(Subscription::ctrl_key(KeyCode::Char('q'), "", Msg::Quit));

        subs
    }

    fn title() -> &'static str {
        "Loan Application"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let step = state.wizard.step();
        Some(Line::from(vec![
            Span::styled(
                format!("Step {}/{}", step.index() + 1, WizardStep::ALL.len()),
                theme.accent_style(),
            ),
            Span::styled(format!(" {}", step.title()), theme.muted_style()),
        ]))
    }
}
