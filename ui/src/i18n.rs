//! Localization of the UI chrome for `briefs-ui`.
//!
//! Built on `i18n-embed` (language selection and asset loading), `fluent`
//! (message formatting), `rust-embed` (FTL files compiled into the binary) and
//! `i18n-embed-fl` (`fl!`, keys checked against the fallback file at compile
//! time).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/briefs_ui.ftl   (fallback / reference)
//!   es-ES/briefs_ui.ftl
//! ```
//!
//! Only navigation, headings and buttons are translated. Research text is
//! published English and stays verbatim.
//!
//! Desktop builds ask the OS for preferred languages; web builds read
//! `navigator.languages`.
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-briefs")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "briefs_ui";
const FALLBACK: &str = "en-US";

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error(transparent)]
    Load(#[from] I18nEmbedError),
}

#[derive(Embed)]
#[folder = "i18n"]
struct Ftl;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK
        .parse::<LanguageIdentifier>()
        .expect("fallback tag is well formed");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static SELECTED: Once = Once::new();

/// Loads bundles for the user's preferred languages on first call.
pub fn init() {
    SELECTED.call_once(|| {
        let preferred = preferred_languages();
        tracing::debug!(?preferred, "selecting ui language");
        if let Err(err) = i18n_embed::select(&*LOADER, &Ftl, &preferred) {
            tracing::warn!(%err, "language selection failed; using {FALLBACK}");
        }
    });
}

/// Switches language at runtime. Tags without embedded bundles fall back
/// to English; malformed tags are rejected and leave the loader untouched.
pub fn set_language(tag: &str) -> Result<(), LocaleError> {
    let lang = tag
        .parse::<LanguageIdentifier>()
        .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Ftl, &[lang])?;
    Ok(())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    Ftl::iter()
        .filter_map(|path| path.split_once('/').map(|(lang, _)| lang.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Browser `navigator.languages` on the web, OS locale settings elsewhere.
fn preferred_languages() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    {
        i18n_embed::WebLanguageRequester::requested_languages()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        i18n_embed::DesktopLanguageRequester::requested_languages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), ["en-US", "es-ES"]);
    }

    // One test owns the global loader so parallel tests never race on it.
    #[test]
    fn language_switching() {
        init();
        set_language("es-ES").expect("select es-ES");
        assert_eq!(fl!(&*LOADER, "nav-explorer"), "Explorador");

        set_language("en-US").expect("select en-US");
        assert_eq!(fl!(&*LOADER, "nav-explorer"), "Explorer");

        let _ = set_language("zz-ZZ");
        assert_eq!(fl!(&*LOADER, "nav-explorer"), "Explorer");

        let err = set_language("not a tag").unwrap_err();
        assert!(matches!(err, LocaleError::InvalidTag(tag) if tag == "not a tag"));
        assert_eq!(fl!(&*LOADER, "nav-explorer"), "Explorer");
    }
}
