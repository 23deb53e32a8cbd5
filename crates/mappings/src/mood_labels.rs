//! UI mood labels and their database expansions.
//!
//! The frontend offers a closed set of 26 Chinese mood labels grouped into
//! 情緒 (how the viewer feels), 情境 (the viewing situation) and 口味 (taste).
//! Each label deterministically expands into canonical mood tags and catalog
//! keywords; a few quality-sensitive labels also impose a minimum rating.
//!
//! Tag order inside each entry matters: the relationship analyzer walks
//! unordered pairs in accumulation order, so the leading tags decide which
//! matrix entry wins for a label combination.

/// Database expansion for one UI mood label.
#[derive(Debug, Clone, Copy)]
pub struct MoodLabelEntry {
    /// The UI label exactly as the frontend sends it.
    pub label: &'static str,
    /// Canonical mood tags this label maps to.
    pub db_mood_tags: &'static [&'static str],
    /// Catalog keywords this label maps to.
    pub db_keywords: &'static [&'static str],
    /// Label category: 情緒 / 情境 / 口味.
    pub category: &'static str,
    /// Short human-readable description shown in the label picker.
    pub description: &'static str,
    /// Minimum vote average imposed when this label is selected.
    pub min_rating: Option<f32>,
}

/// The closed set of UI mood labels (26 entries).
pub const MOOD_LABEL_TO_DB_TAGS: &[MoodLabelEntry] = &[
    // ------------------------------------------------------------------
    // 情緒 — how the viewer feels right now
    // ------------------------------------------------------------------
    MoodLabelEntry {
        label: "失戀",
        db_mood_tags: &["emotional", "melancholic", "bittersweet", "romantic"],
        db_keywords: &["heartbreak", "love", "breakup", "loss", "romance"],
        category: "情緒",
        description: "心碎、需要療癒",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "難過想哭",
        db_mood_tags: &["emotional", "heartbreaking", "melancholic"],
        db_keywords: &["grief", "loss", "tearjerker"],
        category: "情緒",
        description: "想大哭一場",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "壓力很大",
        db_mood_tags: &["relaxing", "comforting", "lighthearted"],
        db_keywords: &["stress relief", "comedy", "slice of life"],
        category: "情緒",
        description: "需要放鬆發洩",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "無聊",
        db_mood_tags: &["exciting", "thrilling", "fast-paced"],
        db_keywords: &["adventure", "action", "heist"],
        category: "情緒",
        description: "想找點刺激",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "需要動力",
        db_mood_tags: &["inspiring", "empowering", "uplifting", "hopeful"],
        db_keywords: &["underdog", "true story", "triumph"],
        category: "情緒",
        description: "想被激勵",
        min_rating: Some(7.0),
    },
    MoodLabelEntry {
        label: "開心",
        db_mood_tags: &["cheerful", "feel-good", "funny"],
        db_keywords: &["comedy", "friendship", "musical"],
        category: "情緒",
        description: "想延續好心情",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "懷舊",
        db_mood_tags: &["bittersweet", "heartwarming", "dreamy"],
        db_keywords: &["nostalgia", "childhood", "coming of age"],
        category: "情緒",
        description: "想回味舊時光",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "焦慮",
        db_mood_tags: &["comforting", "cozy", "relaxing"],
        db_keywords: &["healing", "nature", "gentle"],
        category: "情緒",
        description: "想被安撫",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "想逃離現實",
        db_mood_tags: &["escapist", "fantastical", "magical", "imaginative"],
        db_keywords: &["fantasy", "magic", "parallel world"],
        category: "情緒",
        description: "想進入另一個世界",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "寂寞",
        db_mood_tags: &["heartwarming", "emotional", "comforting"],
        db_keywords: &["friendship", "companionship", "loneliness"],
        category: "情緒",
        description: "想要陪伴感",
        min_rating: None,
    },
    // ------------------------------------------------------------------
    // 情境 — the viewing situation
    // ------------------------------------------------------------------
    MoodLabelEntry {
        label: "派對",
        db_mood_tags: &["lighthearted", "funny", "exciting"],
        db_keywords: &["party", "friendship", "comedy"],
        category: "情境",
        description: "與朋友一起看、氣氛熱鬧",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "獨自一人",
        db_mood_tags: &["dark", "thought-provoking", "contemplative", "atmospheric"],
        db_keywords: &["solitude", "introspection", "character study"],
        category: "情境",
        description: "一個人靜靜地看",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "約會之夜",
        db_mood_tags: &["romantic", "passionate", "dreamy"],
        db_keywords: &["love", "date", "romance"],
        category: "情境",
        description: "兩人共度的夜晚",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "全家觀影",
        db_mood_tags: &["heartwarming", "whimsical", "feel-good"],
        db_keywords: &["family", "animation", "adventure"],
        category: "情境",
        description: "大人小孩都適合",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "朋友聚會",
        db_mood_tags: &["funny", "cheerful", "action-packed"],
        db_keywords: &["comedy", "buddy", "ensemble cast"],
        category: "情境",
        description: "多人同樂",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "週末放鬆",
        db_mood_tags: &["relaxing", "cozy", "lighthearted"],
        db_keywords: &["slice of life", "comfort", "vacation"],
        category: "情境",
        description: "悠閒的午後",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "深夜獨處",
        db_mood_tags: &["moody", "atmospheric", "mysterious"],
        db_keywords: &["night", "neo-noir", "insomnia"],
        category: "情境",
        description: "夜深人靜時",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "雨天",
        db_mood_tags: &["melancholic", "dreamy", "contemplative"],
        db_keywords: &["rain", "memory", "longing"],
        category: "情境",
        description: "窗外下著雨",
        min_rating: None,
    },
    // ------------------------------------------------------------------
    // 口味 — what kind of film
    // ------------------------------------------------------------------
    MoodLabelEntry {
        label: "燒腦",
        db_mood_tags: &["mind-bending", "thought-provoking", "mysterious"],
        db_keywords: &["plot twist", "puzzle", "nonlinear timeline"],
        category: "口味",
        description: "想動腦推理",
        min_rating: Some(7.5),
    },
    MoodLabelEntry {
        label: "熱血",
        db_mood_tags: &["exciting", "action-packed", "epic"],
        db_keywords: &["action", "battle", "hero"],
        category: "口味",
        description: "想看燃的",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "浪漫",
        db_mood_tags: &["romantic", "passionate", "bittersweet"],
        db_keywords: &["love", "romance", "relationship"],
        category: "口味",
        description: "想談戀愛",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "恐怖",
        db_mood_tags: &["terrifying", "creepy", "suspenseful"],
        db_keywords: &["horror", "ghost", "survival"],
        category: "口味",
        description: "想被嚇",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "溫馨治癒",
        db_mood_tags: &["heartwarming", "comforting", "hopeful"],
        db_keywords: &["healing", "kindness", "second chance"],
        category: "口味",
        description: "想被療癒",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "黑色幽默",
        db_mood_tags: &["dark", "funny", "gritty"],
        db_keywords: &["satire", "dark comedy", "crime"],
        category: "口味",
        description: "笑中帶刺",
        min_rating: None,
    },
    MoodLabelEntry {
        label: "史詩冒險",
        db_mood_tags: &["epic", "grand", "adventurous"],
        db_keywords: &["quest", "journey", "war"],
        category: "口味",
        description: "想看大格局",
        min_rating: Some(7.0),
    },
    MoodLabelEntry {
        label: "紀實",
        db_mood_tags: &["realistic", "gritty", "thought-provoking"],
        db_keywords: &["true story", "biography", "journalism"],
        category: "口味",
        description: "想看真實故事",
        min_rating: None,
    },
];

/// Look up a UI mood label by its exact Chinese surface form.
pub fn lookup_mood_label(label: &str) -> Option<&'static MoodLabelEntry> {
    MOOD_LABEL_TO_DB_TAGS.iter().find(|entry| entry.label == label)
}
