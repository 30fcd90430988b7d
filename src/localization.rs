use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Language used when the user's language is unknown or unsupported
pub const DEFAULT_LANGUAGE: &str = "en";

/// Bundled Fluent resources, one per supported language
const RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en/main.ftl")),
    ("ru", include_str!("../locales/ru/main.ftl")),
];

/// Localization manager for the bot
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a new localization manager with every bundled language loaded
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for (language, source) in RESOURCES {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(&locale, source)?;
            bundles.insert(language.to_string(), bundle);
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        locale: &LanguageIdentifier,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Plain-text Telegram messages, no bidi isolation marks
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid {locale} resource: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Conflicting {locale} messages: {errors:?}"))?;

        Ok(bundle)
    }

    /// Map a Telegram language code such as `ru` or `en-GB` to a supported language
    pub fn resolve_language(&self, language_code: Option<&str>) -> &str {
        language_code
            .and_then(|code| code.split(['-', '_']).next())
            .map(str::to_ascii_lowercase)
            .and_then(|base| self.bundles.get_key_value(base.as_str()))
            .map(|(language, _)| language.as_str())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Get a localized message in a specific language, falling back to English
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let Some(bundle) = self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(DEFAULT_LANGUAGE))
        else {
            return format!("Missing translation: {key}");
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors)
            .into_owned();

        if !errors.is_empty() {
            debug!(key, language, ?errors, "Message formatted with errors");
        }

        value
    }

    /// Get a localized message for a Telegram language code
    pub fn get_message(&self, key: &str, language_code: Option<&str>) -> String {
        let language = self.resolve_language(language_code);
        self.get_message_in_language(key, language, None)
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(
        &self,
        key: &str,
        language_code: Option<&str>,
        args: &[(&str, &str)],
    ) -> String {
        let language = self.resolve_language(language_code);
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message_in_language(key, language, Some(&args_map))
    }
}
