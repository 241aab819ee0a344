//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Errors name the config field the reference came from, e.g. `social.github`
//! or `social[1].url`.

use std::borrow::Cow;
use std::env::VarError;

use shellexpand::LookupError;

use crate::{ConfigError, RawNavigation, RawSocial};

/// Expand `${VAR}` references in one config value.
///
/// Values without `${` are returned untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: lookup_message(&e),
        })
}

fn lookup_message(err: &LookupError<VarError>) -> String {
    match err.cause {
        VarError::NotPresent => format!("${{{}}} not set", err.var_name),
        VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", err.var_name),
    }
}

/// Expand an optional string field in place.
pub(crate) fn expand_optional(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value {
        *v = expand_env(v, field)?;
    }
    Ok(())
}

/// Expand the base URL and social link URLs of a raw navigation.
pub(crate) fn expand_navigation(nav: &mut RawNavigation) -> Result<(), ConfigError> {
    expand_optional(&mut nav.base, "base")?;

    match &mut nav.social {
        Some(RawSocial::Map(table)) => {
            for (platform, url) in &mut table.0 {
                *url = expand_env(url, &format!("social.{platform}"))?;
            }
        }
        Some(RawSocial::List(list)) => {
            for (i, link) in list.iter_mut().enumerate() {
                expand_optional(&mut link.url, &format!("social[{i}].url"))?;
            }
        }
        None => {}
    }
    Ok(())
}
