use crate::util::{Env, Environment};

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub const fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub const fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// The stylistic fidelity of terminal output.
///
/// This enumeration captures levels of stylistic fidelity. The primary use case
/// is capturing the capabilities of a terminal or runtime environment (such as
/// CI). But it can also represent the preferences of a user, notably
/// [`Fidelity::NoColor`]. The minimum level [`Fidelity::Plain`] denotes that no
/// styling is possible at all, which is why
/// [`Console::apply_environment`](crate::Console::apply_environment) disables
/// styling for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no ANSI escape codes
    Plain,
    /// ANSI escape codes but no colors
    NoColor,
    /// ANSI and default colors only
    Ansi,
    /// 8-bit indexed colors including ANSI and default colors
    EightBit,
    /// 24-bit RGB color.
    TwentyFourBit,
}

impl Fidelity {
    /// Determine the fidelity level for terminal output based on environment
    /// variables.
    ///
    /// This method determines fidelity based on heuristics about environment
    /// variables. Its primary sources are [NO_COLOR](https://no-color.org) and
    /// [FORCE_COLOR](https://force-color.org). Its secondary source is Chalk's
    /// [supports-color](https://github.com/chalk/supports-color/blob/main/index.js).
    pub fn from_environment(has_tty: bool) -> Self {
        fidelity_from_environment(&Env::default(), has_tty)
    }

    /// Determine whether this fidelity level suffices for rendering the
    /// attribute as is.
    pub fn covers(&self, attribute: impl Into<crate::style::Attribute>) -> bool {
        attribute.into().fidelity() <= *self
    }
}

fn ci_fidelity(env: &impl Environment) -> Fidelity {
    if env.is_defined("GITHUB_ACTIONS") || env.is_defined("GITEA_ACTIONS") {
        return Fidelity::TwentyFourBit;
    }

    let known = [
        "TRAVIS",
        "CIRCLECI",
        "APPVEYOR",
        "GITLAB_CI",
        "BUILDKITE",
        "DRONE",
    ];
    if known.iter().any(|ci| env.is_defined(ci)) || env.has_value("CI_NAME", "codeship") {
        Fidelity::Ansi
    } else {
        Fidelity::Plain
    }
}

// Teamcity 9.x and later support ANSI colors.
fn is_modern_teamcity(version: &str) -> bool {
    let mut chars = version.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('9'), Some('.'), _) => true,
        (Some(c1), Some(c2), Some('.')) => c1 != '0' && c1.is_ascii_digit() && c2.is_ascii_digit(),
        _ => false,
    }
}

pub(crate) fn fidelity_from_environment(env: &impl Environment, has_tty: bool) -> Fidelity {
    if env.is_non_empty("NO_COLOR") {
        return Fidelity::NoColor;
    } else if env.is_non_empty("FORCE_COLOR") {
        return Fidelity::Ansi;
    } else if env.is_defined("TF_BUILD") || env.is_defined("AGENT_NAME") {
        // Must come before the TTY test.
        return Fidelity::Ansi;
    } else if !has_tty || env.has_value("TERM", "dumb") {
        return Fidelity::Plain;
    } else if env.is_defined("CI") {
        return ci_fidelity(env);
    }

    if let Ok(teamcity) = env.read("TEAMCITY_VERSION") {
        return if is_modern_teamcity(&teamcity) {
            Fidelity::Ansi
        } else {
            Fidelity::Plain
        };
    } else if env.has_value("COLORTERM", "truecolor") || env.has_value("TERM", "xterm-kitty") {
        return Fidelity::TwentyFourBit;
    } else if env.has_value("TERM_PROGRAM", "Apple_Terminal") {
        return Fidelity::EightBit;
    } else if env.has_value("TERM_PROGRAM", "iTerm.app") {
        let is_v3 = env
            .read("TERM_PROGRAM_VERSION")
            .is_ok_and(|version| version.starts_with("3."));
        return if is_v3 {
            Fidelity::TwentyFourBit
        } else {
            Fidelity::EightBit
        };
    }

    if let Ok(mut term) = env.read("TERM") {
        term.make_ascii_lowercase();

        if term.ends_with("-256") || term.ends_with("-256color") {
            return Fidelity::EightBit;
        }

        let is_ansi = ["screen", "xterm", "vt100", "vt220", "rxvt"]
            .iter()
            .any(|prefix| term.starts_with(prefix))
            || ["color", "ansi", "cygwin", "linux"].contains(&term.as_str());
        if is_ansi {
            return Fidelity::Ansi;
        }
    } else if env.is_defined("COLORTERM") {
        return Fidelity::Ansi;
    }

    Fidelity::Plain
}
