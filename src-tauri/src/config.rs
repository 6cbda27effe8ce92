use std::env;

const ENV_VAR: &str = "FILEPEEK_ENV";

/// Launch-time settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Open the webview inspector when the main window is created.
    pub dev_mode: bool,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(ENV_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let dev_mode = value.map(|v| v.trim().eq_ignore_ascii_case("development")).unwrap_or(false);
        HostConfig { dev_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_mode_values() {
        let cases = [
            (None, false),
            (Some(""), false),
            (Some("production"), false),
            (Some("development"), true),
            (Some(" Development "), true),
        ];
        for (value, want) in cases {
            assert_eq!(HostConfig::from_value(value).dev_mode, want, "{:?}", value);
        }
    }
}
