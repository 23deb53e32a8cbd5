//! Sentiment cue vocabularies for conflict detection.
//!
//! Two closed cue-word sets (matched as substrings of the lowercased query)
//! and two closed mood-tag sets (matched against the request's mood tags).
//! A request is conflicted when the query leans one way and the mood tags
//! lean the other. The result is advisory; the natural-language text still
//! wins the embedding query.

/// Positive sentiment cue words (Chinese and English).
pub const POSITIVE_CUE_WORDS: &[&str] = &[
    // Chinese
    "溫暖",
    "治癒",
    "療癒",
    "開心",
    "快樂",
    "歡樂",
    "振奮",
    "激勵",
    "正能量",
    "希望",
    "光明",
    "美好",
    "幸福",
    "甜蜜",
    "浪漫",
    // English
    "warm",
    "healing",
    "happy",
    "cheerful",
    "uplifting",
    "inspiring",
    "hopeful",
    "positive",
    "bright",
    "beautiful",
    "sweet",
    "romantic",
];

/// Negative sentiment cue words (Chinese and English).
pub const NEGATIVE_CUE_WORDS: &[&str] = &[
    // Chinese
    "黑暗",
    "陰暗",
    "沉重",
    "悲傷",
    "難過",
    "憂鬱",
    "絕望",
    "痛苦",
    "殘酷",
    "恐怖",
    "驚悚",
    "壓抑",
    "灰暗",
    "冷酷",
    // English
    "dark",
    "gritty",
    "sad",
    "melancholic",
    "depressing",
    "disturbing",
    "harsh",
    "bleak",
    "grim",
    "tragic",
    "painful",
];

/// Mood tags counted as positive for conflict detection.
pub const POSITIVE_SENTIMENT_MOODS: &[&str] = &[
    "cheerful",
    "lighthearted",
    "feel-good",
    "funny",
    "uplifting",
    "heartwarming",
    "comforting",
    "cozy",
    "inspiring",
    "hopeful",
    "romantic",
    "whimsical",
    "playful",
];

/// Mood tags counted as negative for conflict detection.
pub const NEGATIVE_SENTIMENT_MOODS: &[&str] = &[
    "dark",
    "gritty",
    "disturbing",
    "melancholic",
    "bittersweet",
    "heartbreaking",
    "intense",
    "suspenseful",
    "creepy",
    "eerie",
];
