//! Deterministic tmux status-bar colors.
//!
//! Each session gets a color from a fixed palette so windows are visually
//! distinguishable; the pick is a pure function of the name so it is stable
//! across invocations and machines.

const SESSION_COLORS: &[&str] = &[
    "blue",
    "magenta",
    "cyan",
    "green",
    "yellow",
    "red",
    "colour39",  // deep sky blue
    "colour208", // orange
    "colour135", // medium purple
    "colour70",  // chartreuse
    "colour197", // deep pink
    "colour33",  // dodger blue
    "colour172", // dark orange
    "colour48",  // spring green
    "colour99",  // slate blue
    "colour214", // gold
    "colour168", // hot pink
    "colour37",  // teal
    "colour190", // yellow-green
    "colour63",  // royal blue
];

fn stable_hash(name: &str) -> usize {
    name.bytes()
        .fold(0usize, |h, b| h.wrapping_mul(31).wrapping_add(b as usize))
}

pub fn status_color(name: &str) -> &'static str {
    SESSION_COLORS[stable_hash(name) % SESSION_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_is_deterministic() {
        assert_eq!(status_color("web"), status_color("web"));
        assert_eq!(status_color("api"), status_color("api"));
    }

    #[test]
    fn test_status_color_comes_from_palette() {
        for name in ["web", "api", "a", "very-long-session-name_123"] {
            assert!(SESSION_COLORS.contains(&status_color(name)));
        }
    }
}
