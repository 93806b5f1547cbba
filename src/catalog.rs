//! Response catalog loaded from responses.json.
//!
//! The catalog drives every user-facing reply: the main menu text and
//! buttons, the curator text, the inline video menu, and the video cards
//! (Telegram file_id plus caption fields). Editing responses.json is the
//! supported way to change exhibition content without touching code.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::error::AppResult;

/// Reply-keyboard label that opens the curator text.
///
/// Message dispatch matches on this exact string, so the main menu in
/// responses.json must contain it verbatim.
pub const CURATOR_TEXT_LABEL: &str = "📜 кураторский_текст";

/// Reply-keyboard label that opens the video menu. Matched verbatim, like
/// [`CURATOR_TEXT_LABEL`].
pub const VIDEO_MENU_LABEL: &str = "🎬 экспозиционные_видеоматериалы";

/// The whole responses.json file.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseCatalog {
    pub main_menu: MenuEntry,
    pub curator_text: TextEntry,
    pub video_menu: InlineMenuEntry,
    pub videos: HashMap<String, VideoEntry>,
}

/// Menu section with a reply keyboard (the main menu).
#[derive(Debug, Clone, Deserialize)]
pub struct MenuEntry {
    pub text: String,
    pub reply_markup: ReplyKeyboardLayout,
}

/// Plain text section (the curator text).
#[derive(Debug, Clone, Deserialize)]
pub struct TextEntry {
    pub text: String,
}

/// Menu section with an inline keyboard (the video menu).
#[derive(Debug, Clone, Deserialize)]
pub struct InlineMenuEntry {
    pub text: String,
    pub reply_markup: InlineKeyboardLayout,
}

/// Reply keyboard rows as they appear in responses.json. Rows may hold
/// several labels; rendering flattens them to one button per row.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyKeyboardLayout {
    pub keyboard: Vec<Vec<String>>,
}

/// Inline keyboard rows as they appear in responses.json.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineKeyboardLayout {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

/// One inline button: visible text plus the callback payload, which is a
/// key into [`ResponseCatalog::videos`].
#[derive(Debug, Clone, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

/// One video card. The `video_url` field historically held a URL and now
/// holds a Telegram file_id captured through the admin upload flow.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    #[serde(rename = "video_url")]
    pub file_id: String,
    pub title: String,
    pub description: String,
    pub specs: String,
}

impl ResponseCatalog {
    /// Loads and parses the catalog from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON
    /// in the expected shape.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&raw)?;
        Ok(catalog)
    }

    /// Looks up a video card by callback payload.
    pub fn video(&self, key: &str) -> Option<&VideoEntry> {
        self.videos.get(key)
    }

    /// Main menu labels in row order, flattened.
    pub fn main_menu_labels(&self) -> impl Iterator<Item = &str> {
        self.main_menu
            .reply_markup
            .keyboard
            .iter()
            .flatten()
            .map(String::as_str)
    }

    /// Video menu buttons in row order, flattened.
    pub fn video_menu_buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.video_menu.reply_markup.inline_keyboard.iter().flatten()
    }

    /// Logs a warning for every inconsistency between the catalog sections.
    ///
    /// The bot still starts with a broken catalog (a dangling button only
    /// fails when pressed), so these are warnings rather than load errors.
    pub fn log_validation_warnings(&self) {
        for label in [CURATOR_TEXT_LABEL, VIDEO_MENU_LABEL] {
            if !self.main_menu_labels().any(|l| l == label) {
                log::warn!("Main menu is missing the {:?} button; that section will be unreachable", label);
            }
        }

        for button in self.video_menu_buttons() {
            if !self.videos.contains_key(&button.callback_data) {
                log::warn!(
                    "Video menu button {:?} points to {:?}, which has no videos entry",
                    button.text,
                    button.callback_data
                );
            }
        }

        for key in self.videos.keys() {
            if !self.video_menu_buttons().any(|b| &b.callback_data == key) {
                log::warn!("Videos entry {:?} is not reachable from any video menu button", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample_catalog_json() -> String {
        serde_json::json!({
            "main_menu": {
                "text": "Добро пожаловать!",
                "reply_markup": {
                    "keyboard": [[CURATOR_TEXT_LABEL, VIDEO_MENU_LABEL]]
                }
            },
            "curator_text": {
                "text": "Текст куратора."
            },
            "video_menu": {
                "text": "Выберите работу:",
                "reply_markup": {
                    "inline_keyboard": [
                        [
                            {"text": "Видео 1", "callback_data": "video_1"},
                            {"text": "Видео 2", "callback_data": "video_2"}
                        ],
                        [
                            {"text": "Видео 3", "callback_data": "video_3"}
                        ]
                    ]
                }
            },
            "videos": {
                "video_1": {
                    "video_url": "BAACAgIAAxkBAAIB0test1",
                    "title": "Demo",
                    "description": "Описание первой работы",
                    "specs": "Хронометраж: 1:00"
                },
                "video_2": {
                    "video_url": "BAACAgIAAxkBAAIB0test2",
                    "title": "Вторая",
                    "description": "Описание второй работы",
                    "specs": "Хронометраж: 2:00"
                },
                "video_3": {
                    "video_url": "BAACAgIAAxkBAAIB0test3",
                    "title": "Третья",
                    "description": "Описание третьей работы",
                    "specs": "Хронометраж: 3:00"
                }
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_full_catalog() {
        let catalog: ResponseCatalog = serde_json::from_str(&sample_catalog_json()).unwrap();

        assert_eq!(catalog.main_menu.text, "Добро пожаловать!");
        assert_eq!(catalog.curator_text.text, "Текст куратора.");
        assert_eq!(catalog.video_menu.text, "Выберите работу:");
        assert_eq!(catalog.videos.len(), 3);
    }

    #[test]
    fn test_video_url_field_maps_to_file_id() {
        let catalog: ResponseCatalog = serde_json::from_str(&sample_catalog_json()).unwrap();

        let video = catalog.video("video_1").unwrap();
        assert_eq!(video.file_id, "BAACAgIAAxkBAAIB0test1");
        assert_eq!(video.title, "Demo");
    }

    #[test]
    fn test_video_lookup_miss_returns_none() {
        let catalog: ResponseCatalog = serde_json::from_str(&sample_catalog_json()).unwrap();

        assert!(catalog.video("missing_id").is_none());
    }

    #[test]
    fn test_main_menu_labels_flatten_rows() {
        let catalog: ResponseCatalog = serde_json::from_str(&sample_catalog_json()).unwrap();

        let labels: Vec<&str> = catalog.main_menu_labels().collect();
        assert_eq!(labels, vec![CURATOR_TEXT_LABEL, VIDEO_MENU_LABEL]);
    }

    #[test]
    fn test_video_menu_buttons_flatten_in_row_order() {
        let catalog: ResponseCatalog = serde_json::from_str(&sample_catalog_json()).unwrap();

        let payloads: Vec<&str> = catalog.video_menu_buttons().map(|b| b.callback_data.as_str()).collect();
        assert_eq!(payloads, vec!["video_1", "video_2", "video_3"]);
    }

    #[test]
    fn test_load_reads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_catalog_json().as_bytes()).unwrap();

        let catalog = ResponseCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.videos.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        let err = ResponseCatalog::load(&path).unwrap_err();
        assert!(matches!(err, crate::core::error::AppError::Io(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"main_menu\": 42}").unwrap();

        let err = ResponseCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::core::error::AppError::Catalog(_)));
    }
}
