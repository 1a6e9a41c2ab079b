//! Panels
//!
//! The fixed set of screens and the single-active switcher over them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One screen of the mini app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    /// Splash shown until the user presses start
    #[default]
    Welcome,
    Mood,
    Chat,
    Journal,
    Insights,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Welcome,
        Panel::Mood,
        Panel::Chat,
        Panel::Journal,
        Panel::Insights,
    ];

    /// DOM id of the screen element
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Welcome => "welcome-screen",
            Panel::Mood => "mood-screen",
            Panel::Chat => "chat-screen",
            Panel::Journal => "journal-screen",
            Panel::Insights => "insights-screen",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Welcome => "Home",
            Panel::Mood => "Mood",
            Panel::Chat => "Chat",
            Panel::Journal => "Journal",
            Panel::Insights => "Insights",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown panel: {0}")]
pub struct PanelParseError(pub String);

impl FromStr for Panel {
    type Err = PanelParseError;

    /// Accepts the DOM id (`mood-screen`) or the bare name (`mood`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix("-screen").unwrap_or(s);
        match name {
            "welcome" => Ok(Panel::Welcome),
            "mood" => Ok(Panel::Mood),
            "chat" => Ok(Panel::Chat),
            "journal" => Ok(Panel::Journal),
            "insights" => Ok(Panel::Insights),
            _ => Err(PanelParseError(s.to_string())),
        }
    }
}

/// Exactly one active panel at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSet {
    active: Panel,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    /// Deactivate every panel and activate `panel`
    pub fn show(&mut self, panel: Panel) {
        self.active = panel;
    }

    /// Every panel with its active flag, in display order
    pub fn states(&self) -> impl Iterator<Item = (Panel, bool)> + '_ {
        Panel::ALL.iter().map(move |p| (*p, self.is_active(*p)))
    }
}
