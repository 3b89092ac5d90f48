use crate::state::StatusMessage;

pub const GALLERY_TITLE: &str = "Галерея милых котиков";
pub const SEARCH_PLACEHOLDER: &str = "Искать по имени или описанию...";
pub const SHOW_ALL_LABEL: &str = "Все котики";
pub const LOADING_TEXT: &str = "Загружаем котиков... 🐾";

const NO_RESULTS_TEXT: &str = "К сожалению, таких котиков нет :(";
const NONE_YET_TEXT: &str = "Тут пока нет котиков...";

pub fn status_text(status: StatusMessage) -> Option<&'static str> {
    match status {
        StatusMessage::None => None,
        StatusMessage::NoResults => Some(NO_RESULTS_TEXT),
        StatusMessage::NoneYet => Some(NONE_YET_TEXT),
    }
}

pub fn search_button_label(is_loading: bool) -> &'static str {
    if is_loading {
        "Ищем..."
    } else {
        "Найти котика"
    }
}

pub fn favorites_toggle_label(show_favorites_only: bool, favorites_count: usize) -> String {
    if show_favorites_only {
        "Показать всех".to_string()
    } else {
        format!("Избранные ({favorites_count})")
    }
}

pub fn section_title(show_favorites_only: bool, count: usize) -> String {
    let title = if show_favorites_only {
        "Мои любимые котики"
    } else {
        "Все котики в галерее"
    };
    format!("{title} ({count})")
}

pub fn favorite_button_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "❤️ Уже в избранном"
    } else {
        "🤍 Добавить в избранное"
    }
}

pub fn header_subtitle(catalog_size: usize) -> String {
    format!("Здесь я храню фотографии милых котиков - всего {catalog_size} фото!")
}
