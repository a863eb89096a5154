//! `${VAR}` references in the string settings of `nerka.toml`.
//!
//! Three settings are expanded after the file is parsed: `[server] host`,
//! `[auth] cookie_name` and `[site] title`. Paths and the port are always
//! taken literally. `${NAME:-fallback}` uses `fallback` when `NAME` is unset;
//! a plain `${NAME}` with `NAME` unset fails the whole load.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `value` for the setting named `field` from the process environment.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    expand_with(value, field, |name| std::env::var(name).ok())
}

/// Expand `value` using `lookup` to resolve variable names.
///
/// Only the braced form is recognised. A title such as `$5 guide` or a cookie
/// named `$session` comes back untouched.
fn expand_with(
    value: &str,
    field: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, UnsetVar> {
        lookup(name).map(Some).ok_or_else(|| UnsetVar(name.to_owned()))
    })
    .map(Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", err.cause.0),
    })
}

/// Name of a referenced variable that has no value.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn expand(value: &str, field: &str, vars: &[(&str, &str)]) -> Result<String, ConfigError> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        expand_with(value, field, |name| vars.get(name).map(|v| (*v).to_owned()))
    }

    #[test]
    fn test_host_from_variable() {
        let host = expand("${BIND_HOST}", "server.host", &[("BIND_HOST", "0.0.0.0")]).unwrap();

        assert_eq!(host, "0.0.0.0");
    }

    #[test]
    fn test_title_fallback_when_unset() {
        let title = expand("${TEAM_NAME:-Handbook}", "site.title", &[]).unwrap();

        assert_eq!(title, "Handbook");
    }

    #[test]
    fn test_title_with_surrounding_text() {
        let title = expand("${TEAM_NAME} docs", "site.title", &[("TEAM_NAME", "infra")]).unwrap();

        assert_eq!(title, "infra docs");
    }

    #[test]
    fn test_unset_cookie_name_names_field() {
        let err = expand("${COOKIE}", "auth.cookie_name", &[]).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("${COOKIE} not set"));
        assert!(err.to_string().contains("auth.cookie_name"));
    }

    #[test]
    fn test_unbraced_dollar_kept() {
        let title = expand("$5 guide", "site.title", &[("5", "x")]).unwrap();

        assert_eq!(title, "$5 guide");
    }

    #[test]
    fn test_expand_env_falls_back_for_unset_variable() {
        let host = expand_env("${NERKA_CONFIG_TEST_NEVER_SET:-127.0.0.1}", "server.host").unwrap();

        assert_eq!(host, "127.0.0.1");
    }
}
