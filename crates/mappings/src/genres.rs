//! Genre script conversion.
//!
//! The frontend sends traditional-Chinese genre labels; the catalog stores
//! the simplified-Chinese canonical forms. Both directions are exposed.

/// Traditional → simplified genre labels (19 catalog genres).
pub const GENRE_TRADITIONAL_TO_SIMPLIFIED: &[(&str, &str)] = &[
    ("動作", "动作"),
    ("冒險", "冒险"),
    ("動畫", "动画"),
    ("喜劇", "喜剧"),
    ("犯罪", "犯罪"),
    ("紀錄片", "纪录片"),
    ("劇情", "剧情"),
    ("家庭", "家庭"),
    ("奇幻", "奇幻"),
    ("歷史", "历史"),
    ("恐怖", "恐怖"),
    ("音樂", "音乐"),
    ("懸疑", "悬疑"),
    ("愛情", "爱情"),
    ("科幻", "科幻"),
    ("電視電影", "电视电影"),
    ("驚悚", "惊悚"),
    ("戰爭", "战争"),
    ("西部", "西部"),
];

/// Convert a traditional-Chinese genre label to the simplified canonical
/// form. Labels already in simplified script (or unknown) pass through
/// unchanged; unknown labels simply match zero movies downstream.
pub fn genre_to_simplified(genre: &str) -> &str {
    GENRE_TRADITIONAL_TO_SIMPLIFIED
        .iter()
        .find(|(traditional, _)| *traditional == genre)
        .map(|(_, simplified)| *simplified)
        .unwrap_or(genre)
}

/// Convert a simplified-Chinese genre label back to traditional script for
/// display.
pub fn genre_to_traditional(genre: &str) -> &str {
    GENRE_TRADITIONAL_TO_SIMPLIFIED
        .iter()
        .find(|(_, simplified)| *simplified == genre)
        .map(|(traditional, _)| *traditional)
        .unwrap_or(genre)
}
