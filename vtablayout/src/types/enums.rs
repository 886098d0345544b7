use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// How tabs share the strip's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabMode {
    /// Tabs divide the available length equally, no inter-tab margin.
    #[default]
    Fixed,
    /// Tabs have a configured length and margin; the strip may overflow and scroll.
    Scrollable,
}

impl TabMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabMode::Fixed => "fixed",
            TabMode::Scrollable => "scrollable",
        }
    }
}

impl std::fmt::Display for TabMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TabMode {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(TabMode::Fixed),
            "scrollable" => Ok(TabMode::Scrollable),
            _ => Err(TabError::InvalidArgument(format!(
                "unknown tab mode '{s}', expected fixed or scrollable"
            ))),
        }
    }
}

/// Cross-axis placement of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorGravity {
    #[default]
    Leading,
    Trailing,
    Fill,
}

impl IndicatorGravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorGravity::Leading => "leading",
            IndicatorGravity::Trailing => "trailing",
            IndicatorGravity::Fill => "fill",
        }
    }
}

impl std::fmt::Display for IndicatorGravity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndicatorGravity {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leading" | "left" => Ok(IndicatorGravity::Leading),
            "trailing" | "right" => Ok(IndicatorGravity::Trailing),
            "fill" => Ok(IndicatorGravity::Fill),
            _ => Err(TabError::InvalidArgument(format!(
                "unknown indicator gravity '{s}', expected leading, trailing or fill"
            ))),
        }
    }
}

/// How the indicator reaches a newly selected tab when no pager drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorMotion {
    #[default]
    Animated,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
