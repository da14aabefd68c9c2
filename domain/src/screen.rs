//! Screens of the front end

use serde::{Deserialize, Serialize};

/// A navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Top,
    Diagnosis,
    Result,
    Gacha,
    Blend,
}

impl Screen {
    pub fn as_str(&self) -> &str {
        match self {
            Screen::Top => "screen-top",
            Screen::Diagnosis => "screen-diagnosis",
            Screen::Result => "screen-result",
            Screen::Gacha => "screen-gacha",
            Screen::Blend => "screen-blend",
        }
    }

    /// Screen the back button leads to
    pub fn back(&self) -> Screen {
        match self {
            Screen::Blend => Screen::Result,
            _ => Screen::Top,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_navigation() {
        assert_eq!(Screen::Blend.back(), Screen::Result);
        assert_eq!(Screen::Result.back(), Screen::Top);
        assert_eq!(Screen::Gacha.back(), Screen::Top);
    }
}
