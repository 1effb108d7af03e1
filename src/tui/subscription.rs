use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::time::Duration;

/// Represents a keyboard key with optional modifiers (Ctrl, Alt, Shift)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a key binding with no modifiers
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a key binding with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Check if this key binding matches the given key event
    ///
    /// Terminals report Shift on BackTab, so Shift is ignored for it.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        if self.code == KeyCode::BackTab {
            return self.modifiers.difference(KeyModifiers::SHIFT) == event.modifiers.difference(KeyModifiers::SHIFT);
        }
        self.modifiers == event.modifiers
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "Shift+Tab"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Identifies a timer across subscription refreshes.
///
/// A timer stays armed for as long as some subscription declares its key;
/// dropping the key from `subscriptions()` cancels it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey(String);

impl TimerKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimerKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TimerKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Subscriptions represent inputs that an app wants to receive.
/// They are registered via the subscriptions() function.
pub enum Subscription<Msg> {
    /// Subscribe to a specific keyboard key (with optional modifiers)
    Keyboard {
        key: KeyBinding,
        msg: Msg,
        description: String,
    },

    /// Receive keys that no `Keyboard` subscription claimed (text entry)
    Keys {
        handler: Box<dyn Fn(KeyEvent) -> Option<Msg> + Send>,
    },

    /// Periodic timer events
    Timer {
        key: TimerKey,
        interval: Duration,
        msg: Msg,
    },

    /// A single timer event `delay` after the key is first declared
    After {
        key: TimerKey,
        delay: Duration,
        msg: Msg,
    },
}

impl<Msg: 'static> Subscription<Msg> {
    /// Helper to create a keyboard subscription (accepts KeyCode or KeyBinding)
    pub fn keyboard(key: impl Into<KeyBinding>, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key: key.into(),
            msg,
            description: description.into(),
        }
    }

    /// Helper to create a keyboard subscription with Ctrl modifier
    pub fn ctrl_key(code: KeyCode, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key: KeyBinding::ctrl(code),
            msg,
            description: description.into(),
        }
    }

    /// Helper to create a catch-all key handler
    pub fn keys<F>(handler: F) -> Self
    where
        F: Fn(KeyEvent) -> Option<Msg> + Send + 'static,
    {
        Subscription::Keys {
            handler: Box::new(handler),
        }
    }

    /// Helper to create a periodic timer subscription
    pub fn timer(key: impl Into<TimerKey>, interval: Duration, msg: Msg) -> Self {
        Subscription::Timer {
            key: key.into(),
            interval,
            msg,
        }
    }

    /// Helper to create a one-shot timer subscription
    pub fn after(key: impl Into<TimerKey>, delay: Duration, msg: Msg) -> Self {
        Subscription::After {
            key: key.into(),
            delay,
            msg,
        }
    }

    /// Lift a child component's subscription into the parent's message type
    pub fn map<U: 'static>(self, f: fn(Msg) -> U) -> Subscription<U> {
        match self {
            Subscription::Keyboard { key, msg, description } => Subscription::Keyboard {
                key,
                msg: f(msg),
                description,
            },
            Subscription::Keys { handler } => Subscription::Keys {
                handler: Box::new(move |event| handler(event).map(f)),
            },
            Subscription::Timer { key, interval, msg } => Subscription::Timer {
                key,
                interval,
                msg: f(msg),
            },
            Subscription::After { key, delay, msg } => Subscription::After {
                key,
                delay,
                msg: f(msg),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtab_ignores_shift() {
        let binding = KeyBinding::new(KeyCode::BackTab);
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(binding.matches(&event));
    }

    #[test]
    fn test_ctrl_binding_requires_ctrl() {
        let binding = KeyBinding::ctrl(KeyCode::Char('c'));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert_eq!(binding.to_string(), "Ctrl+c");
    }

    #[test]
    fn test_map_keeps_timer_key() {
        let sub: Subscription<u8> = Subscription::after("child/done", Duration::from_millis(600), 1);
        match sub.map(|n| n as u32 + 10) {
            Subscription::After { key, delay, msg } => {
                assert_eq!(key.as_str(), "child/done");
                assert_eq!(delay, Duration::from_millis(600));
                assert_eq!(msg, 11);
            }
            _ => panic!("expected a one-shot timer"),
        }
    }
}
