use super::{CatalogItem, Descriptions, ItemId};

const CATS: [(ItemId, &str, [&str; 3], &str); 12] = [
    (
        1,
        "Рыжик",
        ["рыжий", "игривый", "молодой"],
        "Гоняется за солнечными зайчиками и никогда не сидит на месте.",
    ),
    (
        2,
        "Мурка",
        ["серый", "спокойный", "взрослый"],
        "Любит тёплый подоконник и неторопливые утренние прогулки по дому.",
    ),
    (
        3,
        "Барсик",
        ["полосатый", "ласковый", "домашний"],
        "Мурлычет громче всех и всегда встречает у двери.",
    ),
    (
        4,
        "Снежок",
        ["белый", "пушистый", "нежный"],
        "Белоснежное облако, которое обожает, когда его расчёсывают.",
    ),
    (
        5,
        "Васька",
        ["черный", "хитрый", "ночной"],
        "Знает, где спрятана колбаса, и просыпается ровно к ужину.",
    ),
    (
        6,
        "Дымок",
        ["дымчатый", "элегантный", "спокойный"],
        "Ходит бесшумно и смотрит на всех с достоинством.",
    ),
    (
        7,
        "Персик",
        ["рыжий", "ласковый", "молодой"],
        "Засыпает на коленях через минуту после знакомства.",
    ),
    (
        8,
        "Зефирка",
        ["белый", "пушистый", "сладкий"],
        "Мягкая, как её имя, и очень любит сладкие сны.",
    ),
    (
        9,
        "Тигра",
        ["полосатый", "дикий", "активный"],
        "Настоящий охотник на игрушечных мышей и шнурки.",
    ),
    (
        10,
        "Серафима",
        ["серый", "мудрая", "спокойная"],
        "Наблюдает за миром с книжной полки и всё понимает.",
    ),
    (
        11,
        "Ночка",
        ["черный", "загадочный", "ночная"],
        "Появляется из темноты, когда меньше всего ждёшь.",
    ),
    (
        12,
        "Пушок",
        ["белый", "пушистый", "добрый"],
        "Самый добрый кот на свете, делится лежанкой со всеми.",
    ),
];

pub(super) fn builtin_items() -> (Vec<CatalogItem>, Descriptions) {
    let mut descriptions = Descriptions::default();
    let items = CATS
        .iter()
        .map(|(id, name, tags, description)| {
            descriptions.insert(*id, *description);
            CatalogItem::new(*id, &format!("/images/cat{id}.jpg"), name, *tags)
        })
        .collect();
    (items, descriptions)
}
