//! Trend calculation between a current and previous value

/// Sentinel shown when no previous value exists to compare against
pub const NO_COMPARISON: &str = "n/a";

/// Direction of change between two values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

impl TrendDirection {
    /// Arrow glyph for display
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Neutral => "■",
        }
    }
}

/// Direction plus formatted percentage change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub display: String,
}

impl Trend {
    /// Compute the trend of `current` against `previous`.
    ///
    /// A missing or zero previous value yields Neutral with the
    /// no-comparison sentinel; the percentage division is never evaluated
    /// in that case. Otherwise the percent change is formatted to one
    /// decimal place with an explicit `+` for non-negative deltas.
    pub fn compute(current: u64, previous: Option<u64>) -> Self {
        let previous = match previous {
            Some(p) if p > 0 => p,
            _ => {
                return Self {
                    direction: TrendDirection::Neutral,
                    display: NO_COMPARISON.to_string(),
                }
            }
        };

        let delta = current as i64 - previous as i64;
        let percent = (delta as f64 / previous as f64) * 100.0;

        let direction = match delta.cmp(&0) {
            std::cmp::Ordering::Greater => TrendDirection::Up,
            std::cmp::Ordering::Less => TrendDirection::Down,
            std::cmp::Ordering::Equal => TrendDirection::Neutral,
        };

        // Zero delta keeps the +; a negative percent already carries -
        let display = if delta >= 0 {
            format!("+{:.1}%", percent)
        } else {
            format!("{:.1}%", percent)
        };

        Self { direction, display }
    }

    /// Whether this trend carries a real comparison (not the sentinel)
    pub fn has_comparison(&self) -> bool {
        self.display != NO_COMPARISON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_up() {
        let trend = Trend::compute(120, Some(100));
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.display, "+20.0%");
    }

    #[test]
    fn test_trend_down() {
        let trend = Trend::compute(80, Some(100));
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.display, "-20.0%");
    }

    #[test]
    fn test_trend_equal_keeps_plus_sign() {
        let trend = Trend::compute(100, Some(100));
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.display, "+0.0%");
    }

    #[test]
    fn test_trend_zero_previous_is_neutral() {
        let trend = Trend::compute(500, Some(0));
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.display, NO_COMPARISON);
        assert!(!trend.has_comparison());
    }

    #[test]
    fn test_trend_missing_previous_is_neutral() {
        let trend = Trend::compute(500, None);
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.display, NO_COMPARISON);
    }

    #[test]
    fn test_trend_rounds_to_one_decimal() {
        // 1 / 3 = 33.333...%
        let trend = Trend::compute(4, Some(3));
        assert_eq!(trend.display, "+33.3%");

        // -1 / 1567 = -0.0638...%
        let trend = Trend::compute(1566, Some(1567));
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.display, "-0.1%");
    }

    #[test]
    fn test_trend_down_to_zero() {
        let trend = Trend::compute(0, Some(16));
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.display, "-100.0%");
    }

    #[test]
    fn test_trend_arrows() {
        assert_eq!(TrendDirection::Up.arrow(), "▲");
        assert_eq!(TrendDirection::Down.arrow(), "▼");
        assert_eq!(TrendDirection::Neutral.arrow(), "■");
    }

    #[test]
    fn test_has_comparison() {
        assert!(Trend::compute(100, Some(50)).has_comparison());
        assert!(Trend::compute(100, Some(100)).has_comparison());
        assert!(!Trend::compute(100, None).has_comparison());
    }
}
