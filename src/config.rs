use worker::Env;

pub const DEFAULT_DB_BINDING: &str = "DB";

const DB_BINDING_VAR: &str = "EMPLOYEE_DB_BINDING";
const LOG_REQUESTS_VAR: &str = "LOG_REQUESTS";

/// Runtime settings taken from `[vars]` in wrangler.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub db_binding: String,
    pub log_requests: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_binding: DEFAULT_DB_BINDING.to_string(),
            log_requests: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env(env: &Env) -> Self {
        Self::from_lookup(|name| env.var(name).ok().map(|v| v.to_string()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let db_binding = lookup(DB_BINDING_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.db_binding);
        let log_requests = lookup(LOG_REQUESTS_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.log_requests);

        Self {
            db_binding,
            log_requests,
        }
    }
}

fn parse_flag(v: &str) -> bool {
    !matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServiceConfig::from_lookup(lookup(&[])), ServiceConfig::default());
    }

    #[test]
    fn custom_binding() {
        let cfg = ServiceConfig::from_lookup(lookup(&[("EMPLOYEE_DB_BINDING", "EMPLOYEES")]));
        assert_eq!(cfg.db_binding, "EMPLOYEES");
        assert!(cfg.log_requests);
    }

    #[test]
    fn blank_binding_falls_back() {
        let cfg = ServiceConfig::from_lookup(lookup(&[("EMPLOYEE_DB_BINDING", "  ")]));
        assert_eq!(cfg.db_binding, DEFAULT_DB_BINDING);
    }

    #[test]
    fn log_flag_parsing() {
        for off in ["false", "0", "OFF", " no "] {
            let cfg = ServiceConfig::from_lookup(lookup(&[("LOG_REQUESTS", off)]));
            assert!(!cfg.log_requests, "{off} should disable logging");
        }
        for on in ["true", "1", "yes", ""] {
            let cfg = ServiceConfig::from_lookup(lookup(&[("LOG_REQUESTS", on)]));
            assert!(cfg.log_requests, "{on} should keep logging on");
        }
    }
}
