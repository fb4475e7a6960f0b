use anyhow::{Context, anyhow, bail};
use log::LevelFilter;

pub const USAGE: &str = "usage: haptic-desktop [--absent] [--log-level <off|error|warn|info|debug|trace>]";

/// Run options for the mock host panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Whether the vibration capability starts out present
    pub start_present: bool,
    pub log_level: LevelFilter,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            start_present: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl PanelConfig {
    /// Parse command-line arguments (program name already skipped)
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--absent" => config.start_present = false,
                "--log-level" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--log-level needs a value\n{}", USAGE))?;
                    config.log_level = parse_level(&value)?;
                }
                other => match other.strip_prefix("--log-level=") {
                    Some(value) => config.log_level = parse_level(value)?,
                    None => bail!("unknown argument `{}`\n{}", other, USAGE),
                },
            }
        }

        Ok(config)
    }
}

fn parse_level(value: &str) -> anyhow::Result<LevelFilter> {
    value
        .parse::<LevelFilter>()
        .with_context(|| format!("invalid log level `{}`", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<PanelConfig> {
        PanelConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), PanelConfig::default());
        assert!(PanelConfig::default().start_present);
    }

    #[test]
    fn test_absent_flag() {
        assert!(!parse(&["--absent"]).unwrap().start_present);
    }

    #[test]
    fn test_log_level_forms() {
        assert_eq!(parse(&["--log-level", "debug"]).unwrap().log_level, LevelFilter::Debug);
        assert_eq!(parse(&["--log-level=off"]).unwrap().log_level, LevelFilter::Off);
        assert_eq!(parse(&["--log-level", "TRACE"]).unwrap().log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--log-level"]).is_err());
        assert!(parse(&["--log-level", "loud"]).is_err());
        assert!(parse(&["--present"]).is_err());
    }
}
