use std::fmt;
use std::str::FromStr;

use crate::core::SandboxError;

/// Scene authoring tool bound to pointer gestures.
///
/// `Line`, `Section` and `Spring` are selectable but have no creation
/// behavior yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolMode {
    #[default]
    Select,
    Object,
    Line,
    Ground,
    Section,
    Spring,
}

/// Pointer cursor shown over the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
}

impl ToolMode {
    pub const ALL: [ToolMode; 6] = [
        ToolMode::Select,
        ToolMode::Object,
        ToolMode::Line,
        ToolMode::Ground,
        ToolMode::Section,
        ToolMode::Spring,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolMode::Select => "select",
            ToolMode::Object => "object",
            ToolMode::Line => "line",
            ToolMode::Ground => "ground",
            ToolMode::Section => "section",
            ToolMode::Spring => "spring",
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            ToolMode::Object | ToolMode::Line | ToolMode::Ground | ToolMode::Spring => Cursor::Crosshair,
            ToolMode::Select | ToolMode::Section => Cursor::Default,
        }
    }
}

impl Cursor {
    /// CSS `cursor` value
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Crosshair => "crosshair",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolMode {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // the toolbar radio group names the pointer tool "default"
            "select" | "default" => Ok(ToolMode::Select),
            "object" => Ok(ToolMode::Object),
            "line" => Ok(ToolMode::Line),
            "ground" => Ok(ToolMode::Ground),
            "section" => Ok(ToolMode::Section),
            "spring" => Ok(ToolMode::Spring),
            _ => Err(SandboxError::UnknownTool(s.to_string())),
        }
    }
}
