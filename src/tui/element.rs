use ratatui::style::Style;
use ratatui::text::Line;

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// Minimum size (at least this many lines/columns)
    Min(u16),
    /// Proportional fill (weight for distributing remaining space)
    Fill(u16),
}

/// One clickable entry of a [`Element::List`]
#[derive(Clone)]
pub struct ListItem<Msg> {
    pub content: Element<Msg>,
    pub height: u16,
    pub on_click: Option<Msg>,
}

/// Declarative UI elements that compose to form the view
#[derive(Clone)]
pub enum Element<Msg> {
    /// Empty element that renders nothing
    None,

    /// Static text
    Text { content: String, style: Option<Style> },

    /// Styled text with multiple spans
    StyledText { line: Line<'static> },

    /// Interactive button
    Button {
        label: String,
        on_press: Option<Msg>,
        primary: bool,
    },

    /// Vertical layout container
    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Horizontal layout container
    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Container with padding/margins
    Container {
        child: Box<Element<Msg>>,
        padding: u16,
    },

    /// Panel with border
    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
        border_style: Option<Style>,
    },

    /// Vertical list with a highlighted entry
    List {
        items: Vec<ListItem<Msg>>,
        selected: Option<usize>,
    },

    /// Single-line labelled text input
    TextInput {
        label: String,
        value: String,
        cursor_pos: usize,
        focused: bool,
    },

    /// Enter/exit transition overlay; `level` runs 0 (hidden) to 100 (fully shown)
    Fade {
        child: Box<Element<Msg>>,
        level: u8,
        /// False for content that is leaving; its clicks are not registered
        interactive: bool,
    },
}

impl<Msg> Element<Msg> {
    /// Create a text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: None,
        }
    }

    /// Create a text element with a style
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Element::Text {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Create a styled text element from spans
    pub fn styled_text(line: Line<'static>) -> Self {
        Element::StyledText { line }
    }

    /// Create a button element
    pub fn button(label: impl Into<String>, on_press: Msg) -> Self {
        Element::Button {
            label: label.into(),
            on_press: Some(on_press),
            primary: false,
        }
    }

    /// Create a highlighted call-to-action button
    pub fn primary_button(label: impl Into<String>, on_press: Msg) -> Self {
        Element::Button {
            label: label.into(),
            on_press: Some(on_press),
            primary: true,
        }
    }

    /// Create a column layout with default constraints
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        ColumnBuilder { items, spacing: 0 }
    }

    /// Create a row layout with default constraints
    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        RowBuilder { items, spacing: 1 }
    }

    /// Create a container with padding
    pub fn container(child: Element<Msg>) -> ContainerBuilder<Msg> {
        ContainerBuilder { child, padding: 0 }
    }

    /// Create a bordered panel
    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child,
            title: None,
            border_style: None,
        }
    }

    /// Create a list element
    pub fn list(items: Vec<ListItem<Msg>>, selected: Option<usize>) -> Self {
        Element::List { items, selected }
    }

    /// Create a text input element
    pub fn text_input(label: impl Into<String>, value: impl Into<String>, cursor_pos: usize, focused: bool) -> Self {
        Element::TextInput {
            label: label.into(),
            value: value.into(),
            cursor_pos,
            focused,
        }
    }

    /// Wrap an element in a transition overlay
    pub fn fade(child: Element<Msg>, level: u8) -> Self {
        Element::Fade {
            child: Box::new(child),
            level: level.min(100),
            interactive: true,
        }
    }

    /// Fade overlay for outgoing content, drawn but not clickable
    pub fn fade_out(child: Element<Msg>, level: u8) -> Self {
        Element::Fade {
            child: Box::new(child),
            level: level.min(100),
            interactive: false,
        }
    }

    /// Get the default layout constraint for this element type
    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } | Element::StyledText { .. } => LayoutConstraint::Length(1),
            Element::Button { .. } => LayoutConstraint::Length(3),
            Element::TextInput { .. } => LayoutConstraint::Length(3),
            Element::List { items, .. } => {
                LayoutConstraint::Length(items.iter().map(|item| item.height).sum())
            }
            _ => LayoutConstraint::Fill(1),
        }
    }

    /// Lift a child component's view into the parent's message type
    pub fn map<U>(self, f: fn(Msg) -> U) -> Element<U> {
        match self {
            Element::None => Element::None,
            Element::Text { content, style } => Element::Text { content, style },
            Element::StyledText { line } => Element::StyledText { line },
            Element::Button { label, on_press, primary } => Element::Button {
                label,
                on_press: on_press.map(f),
                primary,
            },
            Element::Column { items, spacing } => Element::Column {
                items: items.into_iter().map(|(c, e)| (c, e.map(f))).collect(),
                spacing,
            },
            Element::Row { items, spacing } => Element::Row {
                items: items.into_iter().map(|(c, e)| (c, e.map(f))).collect(),
                spacing,
            },
            Element::Container { child, padding } => Element::Container {
                child: Box::new(child.map(f)),
                padding,
            },
            Element::Panel { child, title, border_style } => Element::Panel {
                child: Box::new(child.map(f)),
                title,
                border_style,
            },
            Element::List { items, selected } => Element::List {
                items: items
                    .into_iter()
                    .map(|item| ListItem {
                        content: item.content.map(f),
                        height: item.height,
                        on_click: item.on_click.map(f),
                    })
                    .collect(),
                selected,
            },
            Element::TextInput { label, value, cursor_pos, focused } => Element::TextInput {
                label,
                value,
                cursor_pos,
                focused,
            },
            Element::Fade { child, level, interactive } => Element::Fade {
                child: Box::new(child.map(f)),
                level,
                interactive,
            },
        }
    }
}

impl<Msg> ListItem<Msg> {
    pub fn new(content: Element<Msg>, height: u16) -> Self {
        Self {
            content,
            height,
            on_click: None,
        }
    }

    pub fn on_click(mut self, msg: Msg) -> Self {
        self.on_click = Some(msg);
        self
    }
}

/// Builder for column layouts
pub struct ColumnBuilder<Msg> {
    items: Vec<(LayoutConstraint, Element<Msg>)>,
    spacing: u16,
}

impl<Msg> ColumnBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 0,
        }
    }

    /// Add a child with an explicit constraint
    pub fn add(mut self, element: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, element));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Column {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for ColumnBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for row layouts
pub struct RowBuilder<Msg> {
    items: Vec<(LayoutConstraint, Element<Msg>)>,
    spacing: u16,
}

impl<Msg> RowBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 1,
        }
    }

    /// Add a child with an explicit constraint
    pub fn add(mut self, element: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, element));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Row {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for RowBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for padded containers
pub struct ContainerBuilder<Msg> {
    child: Element<Msg>,
    padding: u16,
}

impl<Msg> ContainerBuilder<Msg> {
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Container {
            child: Box::new(self.child),
            padding: self.padding,
        }
    }
}

/// Builder for bordered panels
pub struct PanelBuilder<Msg> {
    child: Element<Msg>,
    title: Option<String>,
    border_style: Option<Style>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: Box::new(self.child),
            title: self.title,
            border_style: self.border_style,
        }
    }
}
