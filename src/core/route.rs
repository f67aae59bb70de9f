//! # Route Classification
//!
//! Pure string classification of the current path. No caching, no side
//! effects — callers recompute the flags on every render, which is cheap
//! enough that memoization would only add state to keep in sync.

/// The dashboard route. Matched by exact equality only.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// The game-play path segment. Matched by substring containment so that
/// nested sub-paths (e.g. `/play/game/42/question/3`) also count.
pub const GAME_PLAY_SEGMENT: &str = "/play/game";

/// Flags derived from the current path, recomputed each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteFlags {
    pub is_game_play: bool,
    pub is_dashboard: bool,
}

/// Classify a path string.
///
/// `is_dashboard` uses exact equality: `/dashboard/x` is not the
/// dashboard, and no trailing-slash or case normalization is applied.
/// Any input produces a definite (possibly both-false) result, so
/// classification never fails.
pub fn classify(path: &str) -> RouteFlags {
    RouteFlags {
        is_game_play: path.contains(GAME_PLAY_SEGMENT),
        is_dashboard: path == DASHBOARD_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_exact_match_only() {
        assert!(classify("/dashboard").is_dashboard);
        assert!(!classify("/dashboard/").is_dashboard);
        assert!(!classify("/dashboard/x").is_dashboard);
        assert!(!classify("/Dashboard").is_dashboard);
        assert!(!classify("/profile").is_dashboard);
        assert!(!classify("").is_dashboard);
    }

    #[test]
    fn test_game_play_substring_containment() {
        assert!(classify("/play/game").is_game_play);
        assert!(classify("/play/game/42").is_game_play);
        assert!(classify("/play/game/42/question/3").is_game_play);
        // Containment is positional-agnostic on purpose
        assert!(classify("/admin/play/game/7").is_game_play);
        assert!(!classify("/play").is_game_play);
        assert!(!classify("/leaderboard").is_game_play);
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = classify("/dashboard");
        assert!(flags.is_dashboard);
        assert!(!flags.is_game_play);

        let flags = classify("/play/game/1");
        assert!(!flags.is_dashboard);
        assert!(flags.is_game_play);
    }
}
