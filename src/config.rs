use crate::logging::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_PARALLAX_PERCENT: u32 = 15;
const PARALLAX_PERCENT_BOUNDS: (u32, u32) = (0, 100);

/// Build-time settings, read from the environment `trunk build` runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub parallax_percent: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            parallax_percent: DEFAULT_PARALLAX_PERCENT,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_LOG_LEVEL"),
            option_env!("PORTFOLIO_PARALLAX_PERCENT"),
        )
    }

    fn from_values(log_level: Option<&str>, parallax_percent: Option<&str>) -> Self {
        Self {
            log_level: parse_log_level(log_level, DEFAULT_LOG_LEVEL),
            parallax_percent: parse_u32_with_bounds(
                parallax_percent,
                DEFAULT_PARALLAX_PERCENT,
                PARALLAX_PERCENT_BOUNDS,
            ),
        }
    }

    /// Decorative background offset for the current scroll position.
    pub fn parallax_offset(&self, scroll_y: u32) -> f64 {
        f64::from(scroll_y) * f64::from(self.parallax_percent) / 100.0
    }
}

fn parse_u32_with_bounds(value: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    value.and_then(LogLevel::from_str).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(SiteConfig::from_values(None, None), SiteConfig::default());
    }

    #[test]
    fn valid_values_are_applied() {
        let config = SiteConfig::from_values(Some(" Debug "), Some(" 40 "));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.parallax_percent, 40);
    }

    #[test]
    fn out_of_bounds_or_garbage_falls_back() {
        let config = SiteConfig::from_values(Some("verbose"), Some("250"));
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::from_values(Some(""), Some("-3"));
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::from_values(Some("   "), None);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn parallax_offset_scales_scroll_position() {
        let config = SiteConfig::from_values(None, Some("50"));
        assert_eq!(config.parallax_offset(300), 150.0);
        assert_eq!(SiteConfig::from_values(None, Some("0")).parallax_offset(999), 0.0);
    }
}
