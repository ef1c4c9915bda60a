use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if let Some(dir) = cfg.web.public_dir.as_ref()
        && dir.as_os_str().is_empty()
    {
        errors.push("web.public_dir must not be empty when set".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn accepts_default_config() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn collects_every_problem_into_one_error() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database.url = String::new();
        cfg.database.max_connections = 1;
        cfg.database.min_idle = 4;

        let err = validate(&cfg).expect_err("config should be rejected");
        let message = err.to_string();

        assert!(message.contains("general.host"));
        assert!(message.contains("database.url"));
        assert!(message.contains("database.min_idle (4)"));
    }

    #[test]
    fn rejects_zero_max_connections() {
        let mut cfg = AppConfig::default();
        cfg.database.max_connections = 0;
        cfg.database.min_idle = 0;

        let err = validate(&cfg).expect_err("zero pool size should be rejected");
        assert!(err.to_string().contains("database.max_connections must be > 0"));
    }

    #[test]
    fn rejects_empty_public_dir() {
        let mut cfg = AppConfig::default();
        cfg.web.public_dir = Some(PathBuf::new());

        let err = validate(&cfg).expect_err("empty public dir should be rejected");
        assert!(err.to_string().contains("web.public_dir"));
    }
}
