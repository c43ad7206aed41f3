//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "agent-dashboard";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        home_dir_from(lookup_env)
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        log_file_from(lookup_env)
    }

    fn data_location_from_env(&self) -> Option<String> {
        lookup_env("DASHBOARD_DATA")
    }
}

/// 空文字は未設定と同じに扱う
fn lookup_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn home_dir_from(lookup: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    if let Some(home) = lookup("DASHBOARD_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }

    let config_base = lookup("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(HomeDir::new(config_base.join(APP_DIR_NAME)))
}

fn log_file_from(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf, Error> {
    if let Some(path) = lookup("DASHBOARD_LOG_FILE") {
        return Ok(PathBuf::from(path));
    }
    let home = home_dir_from(lookup)?;
    Ok(Dirs::from_home(&home).log_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |k| map.get(k).map(|v| v.to_string())
    }

    #[test]
    fn test_dashboard_home_wins() {
        let home = home_dir_from(lookup_from(&[
            ("DASHBOARD_HOME", "/opt/dash"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/u"),
        ]))
        .unwrap();
        assert_eq!(*home, PathBuf::from("/opt/dash"));
    }

    #[test]
    fn test_xdg_then_home_fallback() {
        let home = home_dir_from(lookup_from(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/u")]))
            .unwrap();
        assert_eq!(*home, PathBuf::from("/xdg/agent-dashboard"));

        let home = home_dir_from(lookup_from(&[("HOME", "/home/u")])).unwrap();
        assert_eq!(*home, PathBuf::from("/home/u/.config/agent-dashboard"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = home_dir_from(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_log_file_override_and_default() {
        let path = log_file_from(lookup_from(&[("DASHBOARD_LOG_FILE", "/tmp/x.jsonl")])).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.jsonl"));

        let path = log_file_from(lookup_from(&[("DASHBOARD_HOME", "/opt/dash")])).unwrap();
        assert_eq!(path, PathBuf::from("/opt/dash/state/logs/dashboard.jsonl"));
    }
}
