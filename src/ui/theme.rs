use crossterm::style::{Color, Stylize};

/// Semantic colors for CLI output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const DEPLOY: &str = "📦";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const CHECK: &str = "[CHECK]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Deploy,
    Check,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Deploy) => icons::DEPLOY,
            (true, Icon::Check) => icons::CHECK,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Deploy) => icons_ascii::DEPLOY,
            (false, Icon::Check) => icons_ascii::CHECK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Deploy | Icon::Check => colors::INFO,
        };
        s.with(color).to_string()
    }
}

/// Dim secondary text when color is enabled
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.with(colors::DIM).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_icons_without_color() {
        assert_eq!(Icon::Success.colored(false, false), "[OK]");
        assert_eq!(Icon::Error.colored(false, true), "✗");
    }

    #[test]
    fn colored_icons_wrap_the_glyph() {
        let s = Icon::Warning.colored(true, true);
        assert!(s.contains("⚠"));
        assert_ne!(s, "⚠");
    }
}
