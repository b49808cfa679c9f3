//! Locale sources.

use rsvp_core::ports::LocalePort;

/// Reads the locale from the usual POSIX variables, most specific first.
pub struct EnvLocale;

impl LocalePort for EnvLocale {
    fn preferred_locale(&self) -> Option<String> {
        locale_from(|key| std::env::var(key).ok())
    }
}

/// A locale decided by configuration (or no locale at all).
pub struct FixedLocale(pub Option<String>);

impl LocalePort for FixedLocale {
    fn preferred_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
