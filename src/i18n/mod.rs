//! Internationalization (i18n) module for pathos
//!
//! Messages ship embedded for English and Traditional Chinese. A file at
//! `<config dir>/i18n/<lang>.toml` overrides the embedded table.

use serde::Deserialize;
use std::sync::OnceLock;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === Screen ===
    pub title: &'static str,
    pub empty_list: &'static str,
    pub help: &'static str,

    // === Prompts ===
    pub prompt_new_path: &'static str,
    pub confirm_save: &'static str,

    // === Errors ===
    pub error_not_a_directory: &'static str,

    // === Exit ===
    pub saved_to: &'static str,
    pub discarded: &'static str,
    pub reload_hint: &'static str,
}

/// Temporary structure for deserializing TOML messages
#[derive(Debug, Deserialize)]
struct MessagesToml {
    title: String,
    empty_list: String,
    help: String,
    prompt_new_path: String,
    confirm_save: String,
    error_not_a_directory: String,
    saved_to: String,
    discarded: String,
    reload_hint: String,
}

/// Helper macro to leak a string and get a &'static str
macro_rules! leak {
    ($s:expr) => {
        Box::leak($s.into_boxed_str())
    };
}

impl From<MessagesToml> for Messages {
    fn from(toml: MessagesToml) -> Self {
        Messages {
            title: leak!(toml.title),
            empty_list: leak!(toml.empty_list),
            help: leak!(toml.help),
            prompt_new_path: leak!(toml.prompt_new_path),
            confirm_save: leak!(toml.confirm_save),
            error_not_a_directory: leak!(toml.error_not_a_directory),
            saved_to: leak!(toml.saved_to),
            discarded: leak!(toml.discarded),
            reload_hint: leak!(toml.reload_hint),
        }
    }
}

/// Embedded English messages (fallback)
const EMBEDDED_EN: &str = include_str!("../../assets/i18n/en.toml");
/// Embedded Traditional Chinese messages
const EMBEDDED_ZH_TW: &str = include_str!("../../assets/i18n/zh-TW.toml");

/// Global messages instance
static MESSAGES: OnceLock<Messages> = OnceLock::new();

fn embedded(lang: &str) -> Option<&'static str> {
    match lang.to_lowercase().replace('_', "-").as_str() {
        "en" => Some(EMBEDDED_EN),
        "zh-tw" => Some(EMBEDDED_ZH_TW),
        _ => None,
    }
}

/// Load messages from external file, embedded table, or embedded English
pub fn load_messages(lang: &str) -> Messages {
    let lang_file = crate::Config::config_dir()
        .join("i18n")
        .join(format!("{}.toml", lang));

    if lang_file.exists() {
        match std::fs::read_to_string(&lang_file) {
            Ok(content) => match toml::from_str::<MessagesToml>(&content) {
                Ok(toml_messages) => return toml_messages.into(),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse language file {}: {}",
                        lang_file.display(),
                        e
                    );
                }
            },
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read language file {}: {}",
                    lang_file.display(),
                    e
                );
            }
        }
    }

    let source = embedded(lang).unwrap_or(EMBEDDED_EN);
    let toml_messages: MessagesToml =
        toml::from_str(source).expect("Failed to parse embedded messages");
    toml_messages.into()
}

/// Initialize and get the global messages instance
pub fn init_messages(lang: &str) -> &'static Messages {
    MESSAGES.get_or_init(|| load_messages(lang))
}

/// Get the current global messages (defaults to English if not initialized)
pub fn messages() -> &'static Messages {
    MESSAGES.get_or_init(|| load_messages("en"))
}
