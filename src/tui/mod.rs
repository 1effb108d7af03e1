pub mod app;
pub mod apps;
pub mod command;
pub mod element;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod subscription;
pub mod theme;
pub mod timers;
pub mod transition;
pub mod widgets;

pub use app::App;
pub use command::Command;
pub use element::{Element, LayoutConstraint, ListItem};
pub use renderer::{InteractionRegistry, Renderer};
pub use runtime::Runtime;
pub use state::RuntimeConfig;
pub use subscription::{KeyBinding, Subscription, TimerKey};
pub use theme::{Theme, ThemeVariant};
pub use transition::Transition;
pub use widgets::TextField;
