/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    Alert, // An alarm reminder is waiting to be dismissed
}

/// Field of the add-task form that receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Alarm,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Text => Self::Alarm,
            Self::Alarm => Self::Text,
        }
    }
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Label for the toggle control: names the theme it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark Mode",
            Self::Dark => "🌞 Light Mode",
        }
    }
}
