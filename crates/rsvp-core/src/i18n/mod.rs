//! Bilingual string bundles and display-language selection.

mod bundle;
mod language;

pub use bundle::{
    bundle, AddressStrings, ErrorStrings, LandingStrings, RsvpStrings, Strings,
    ThanksStrings, EN, KO,
};
pub use language::{Language, LANGUAGE_STORAGE_KEY};
