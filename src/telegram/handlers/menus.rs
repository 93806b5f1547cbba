//! Menu rendering: main reply keyboard, curator text, inline video menu
//!
//! All texts and button sets come from the response catalog. Keyboards are
//! flattened to one button per row regardless of how responses.json groups
//! them, so long Russian labels never get squeezed side by side.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, Message};

use crate::catalog::ResponseCatalog;
use crate::telegram::Bot;

/// Builds the main menu reply keyboard from the catalog.
///
/// Resized to content; stays on screen until replaced.
pub(super) fn build_main_menu_keyboard(catalog: &ResponseCatalog) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = catalog
        .main_menu_labels()
        .map(|label| vec![KeyboardButton::new(label.to_string())])
        .collect();

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Builds the inline video menu keyboard from the catalog.
pub(super) fn build_video_menu_keyboard(catalog: &ResponseCatalog) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = catalog
        .video_menu_buttons()
        .map(|button| {
            vec![InlineKeyboardButton::callback(
                button.text.clone(),
                button.callback_data.clone(),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Sends the main menu text with the reply keyboard.
pub async fn send_main_menu(bot: &Bot, chat_id: ChatId, catalog: &ResponseCatalog) -> ResponseResult<Message> {
    bot.send_message(chat_id, catalog.main_menu.text.clone())
        .reply_markup(build_main_menu_keyboard(catalog))
        .await
}

/// Sends the curator text, keeping the main menu keyboard on screen.
pub async fn send_curator_text(bot: &Bot, chat_id: ChatId, catalog: &ResponseCatalog) -> ResponseResult<Message> {
    bot.send_message(chat_id, catalog.curator_text.text.clone())
        .reply_markup(build_main_menu_keyboard(catalog))
        .await
}

/// Sends the video menu text with the inline keyboard.
pub async fn send_video_menu(bot: &Bot, chat_id: ChatId, catalog: &ResponseCatalog) -> ResponseResult<Message> {
    bot.send_message(chat_id, catalog.video_menu.text.clone())
        .reply_markup(build_video_menu_keyboard(catalog))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog_with_keyboard_rows() -> ResponseCatalog {
        serde_json::from_value(serde_json::json!({
            "main_menu": {
                "text": "Меню",
                "reply_markup": {
                    "keyboard": [["📜 кураторский_текст", "🎬 экспозиционные_видеоматериалы"], ["О выставке"]]
                }
            },
            "curator_text": { "text": "Текст" },
            "video_menu": {
                "text": "Видео",
                "reply_markup": {
                    "inline_keyboard": [
                        [
                            {"text": "Первое", "callback_data": "video_1"},
                            {"text": "Второе", "callback_data": "video_2"}
                        ],
                        [
                            {"text": "Третье", "callback_data": "video_3"}
                        ]
                    ]
                }
            },
            "videos": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_main_menu_keyboard_one_button_per_row() {
        let catalog = catalog_with_keyboard_rows();
        let kb = build_main_menu_keyboard(&catalog);

        assert_eq!(kb.keyboard.len(), 3, "every label becomes its own row");
        for row in &kb.keyboard {
            assert_eq!(row.len(), 1);
        }
        assert_eq!(kb.keyboard[0][0].text, "📜 кураторский_текст");
        assert_eq!(kb.keyboard[1][0].text, "🎬 экспозиционные_видеоматериалы");
        assert_eq!(kb.keyboard[2][0].text, "О выставке");
    }

    #[test]
    fn test_main_menu_keyboard_is_resized() {
        let catalog = catalog_with_keyboard_rows();
        let kb = build_main_menu_keyboard(&catalog);

        assert!(kb.resize_keyboard);
        assert!(!kb.one_time_keyboard);
    }

    #[test]
    fn test_video_menu_keyboard_one_button_per_row() {
        let catalog = catalog_with_keyboard_rows();
        let kb = build_video_menu_keyboard(&catalog);

        assert_eq!(kb.inline_keyboard.len(), 3);
        for row in &kb.inline_keyboard {
            assert_eq!(row.len(), 1);
        }
    }

    #[test]
    fn test_video_menu_keyboard_preserves_labels_and_payloads() {
        let catalog = catalog_with_keyboard_rows();
        let kb = build_video_menu_keyboard(&catalog);

        let labels: Vec<&str> = kb
            .inline_keyboard
            .iter()
            .map(|row| row[0].text.as_str())
            .collect();
        assert_eq!(labels, vec!["Первое", "Второе", "Третье"]);

        let payloads: Vec<String> = kb
            .inline_keyboard
            .iter()
            .filter_map(|row| match &row[0].kind {
                teloxide::types::InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(payloads, vec!["video_1", "video_2", "video_3"]);
    }

    #[test]
    fn test_video_menu_button_count_matches_catalog() {
        let catalog = catalog_with_keyboard_rows();
        let kb = build_video_menu_keyboard(&catalog);

        let button_count: usize = kb.inline_keyboard.iter().map(|row| row.len()).sum();
        assert_eq!(button_count, catalog.video_menu_buttons().count());
    }
}
