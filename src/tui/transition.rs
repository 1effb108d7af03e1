//! Cosmetic enter/exit animation for swapping whole screens.
//!
//! The transition only decorates the view. State changes happen before the
//! animation starts and input is routed to the new screen straight away.

use crate::tui::Element;

/// Where the animation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Outgoing content is fading out; `frame` counts up to the exit length
    Exiting { frame: u16 },
    /// Incoming content is fading in; `frame` counts up to the enter length
    Entering { frame: u16 },
}

pub struct Transition<Msg> {
    phase: Phase,
    exit_frames: u16,
    enter_frames: u16,
    /// Last content rendered while idle or entering
    outgoing: Option<Element<Msg>>,
}

impl<Msg: Clone> Transition<Msg> {
    pub fn new(exit_frames: u16, enter_frames: u16) -> Self {
        Self {
            phase: Phase::Idle,
            exit_frames,
            enter_frames,
            outgoing: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begin animating towards new content
    pub fn start(&mut self) {
        self.phase = if self.outgoing.is_some() && self.exit_frames > 0 {
            Phase::Exiting { frame: 0 }
        } else if self.enter_frames > 0 {
            Phase::Entering { frame: 0 }
        } else {
            Phase::Idle
        };
    }

    /// Advance one animation frame
    pub fn tick(&mut self) {
        self.phase = match self.phase {
            Phase::Idle => Phase::Idle,
            Phase::Exiting { frame } if frame + 1 >= self.exit_frames => {
                self.outgoing = None;
                if self.enter_frames > 0 {
                    Phase::Entering { frame: 0 }
                } else {
                    Phase::Idle
                }
            }
            Phase::Exiting { frame } => Phase::Exiting { frame: frame + 1 },
            Phase::Entering { frame } if frame + 1 >= self.enter_frames => Phase::Idle,
            Phase::Entering { frame } => Phase::Entering { frame: frame + 1 },
        };
    }

    /// Visibility of the content being shown, 0..=100
    pub fn level(&self) -> u8 {
        match self.phase {
            Phase::Idle => 100,
            Phase::Exiting { frame } => (100 - frame as u32 * 100 / self.exit_frames.max(1) as u32) as u8,
            Phase::Entering { frame } => (frame as u32 * 100 / self.enter_frames.max(1) as u32) as u8,
        }
    }

    /// Wrap the current view; while exiting, the previous screen is shown instead
    pub fn decorate(&mut self, content: Element<Msg>) -> Element<Msg> {
        match self.phase {
            Phase::Idle => {
                self.outgoing = Some(content.clone());
                content
            }
            Phase::Exiting { .. } => match &self.outgoing {
                Some(previous) => Element::fade_out(previous.clone(), self.level()),
                None => Element::fade_out(content, 0),
            },
            Phase::Entering { .. } => {
                self.outgoing = Some(content.clone());
                Element::fade(content, self.level())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label<Msg>(element: &Element<Msg>) -> Option<&str> {
        match element {
            Element::Text { content, .. } => Some(content.as_str()),
            Element::Fade { child, .. } => label(child),
            _ => None,
        }
    }

    #[test]
    fn test_exit_shows_previous_content_then_enters() {
        let mut transition: Transition<()> = Transition::new(2, 2);
        transition.decorate(Element::text("first"));

        transition.start();
        assert_eq!(transition.phase(), Phase::Exiting { frame: 0 });
        let shown = transition.decorate(Element::text("second"));
        assert_eq!(label(&shown), Some("first"));

        transition.tick();
        transition.tick();
        assert_eq!(transition.phase(), Phase::Entering { frame: 0 });
        assert_eq!(transition.level(), 0);
        let shown = transition.decorate(Element::text("second"));
        assert_eq!(label(&shown), Some("second"));

        transition.tick();
        assert_eq!(transition.level(), 50);
        transition.tick();
        assert!(!transition.is_animating());
    }

    fn is_interactive<Msg>(element: &Element<Msg>) -> bool {
        match element {
            Element::Fade { interactive, .. } => *interactive,
            _ => true,
        }
    }

    #[test]
    fn test_outgoing_content_is_not_clickable() {
        let mut transition: Transition<()> = Transition::new(1, 1);
        transition.decorate(Element::button("Next", ()));

        transition.start();
        let shown = transition.decorate(Element::text("second"));
        assert!(!is_interactive(&shown));

        transition.tick();
        let shown = transition.decorate(Element::text("second"));
        assert_eq!(label(&shown), Some("second"));
        assert!(is_interactive(&shown));
    }

    #[test]
    fn test_first_screen_only_enters() {
        let mut transition: Transition<()> = Transition::new(3, 4);
        transition.start();
        assert_eq!(transition.phase(), Phase::Entering { frame: 0 });
    }
}
