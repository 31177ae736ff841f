use std::sync::{PoisonError, RwLock};

/// Desktop names set explicitly, taking precedence over `$XDG_CURRENT_DESKTOP`.
static DESKTOP_ENV: RwLock<Option<Vec<String>>> = RwLock::new(None);

/// Set the name of the current desktop environment.
///
/// Several names may be given colon separated, as in `$XDG_CURRENT_DESKTOP`.
/// Passing `None` restores the environment variable lookup.
pub fn set_desktop_env(de_name: Option<&str>) {
    let names = de_name.map(split_desktop_names).filter(|n| !n.is_empty());
    tracing::debug!("Desktop environment override: {:?}", names);
    *DESKTOP_ENV.write().unwrap_or_else(PoisonError::into_inner) = names;
}

/// Names of the active desktop environment, most specific first.
///
/// Empty when neither an override nor `$XDG_CURRENT_DESKTOP` is set.
pub fn current_desktops() -> Vec<String> {
    if let Some(names) = DESKTOP_ENV
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return names.clone();
    }

    std::env::var("XDG_CURRENT_DESKTOP")
        .map(|value| split_desktop_names(&value))
        .unwrap_or_default()
}

fn split_desktop_names(value: &str) -> Vec<String> {
    value
        .split(':')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
