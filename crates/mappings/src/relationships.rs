//! Curated mood-pair relationship matrix.
//!
//! Keyed by unordered pairs of canonical mood tags. Each entry classifies the
//! pair and carries the embedding-query template used when the request is
//! mood-only. Pairs absent from the matrix fall back to the group heuristic
//! in the query crate.

/// Semantic relationship between two mood tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// A transformation arc from one emotional state to another.
    Journey,
    /// Deliberately contrasting moods held in tension.
    Paradox,
    /// Two tags reinforcing the same direction.
    Intensification,
    /// Independent facets layered in one film.
    MultiFaceted,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Journey => "journey",
            RelationKind::Paradox => "paradox",
            RelationKind::Intensification => "intensification",
            RelationKind::MultiFaceted => "multi-faceted",
        }
    }
}

/// One curated pair in the relationship matrix.
#[derive(Debug, Clone, Copy)]
pub struct MoodPairEntry {
    pub pair: (&'static str, &'static str),
    pub kind: RelationKind,
    /// Embedding-query template used verbatim for mood-only requests.
    pub template: &'static str,
    pub description: &'static str,
    pub zh_description: &'static str,
}

use RelationKind::{Intensification, Journey, MultiFaceted, Paradox};

/// The curated matrix (51 pairs).
pub const MOOD_RELATIONSHIP_MATRIX: &[MoodPairEntry] = &[
    // ------------------------------------------------------------------
    // Journey — emotional transformation arcs
    // ------------------------------------------------------------------
    MoodPairEntry {
        pair: ("melancholic", "hopeful"),
        kind: Journey,
        template: "A story that moves from sorrow to hope, an emotional journey of healing and renewal",
        description: "sadness transforming into hope",
        zh_description: "從悲傷走向希望的療癒旅程",
    },
    MoodPairEntry {
        pair: ("heartbreaking", "uplifting"),
        kind: Journey,
        template: "A heartbreaking story that rises into an uplifting triumph of the human spirit",
        description: "heartbreak resolving into triumph",
        zh_description: "從心碎到振奮的逆轉",
    },
    MoodPairEntry {
        pair: ("dark", "hopeful"),
        kind: Journey,
        template: "A film that descends into darkness yet finds a path toward hope and light",
        description: "darkness giving way to hope",
        zh_description: "在黑暗中尋找希望",
    },
    MoodPairEntry {
        pair: ("emotional", "heartwarming"),
        kind: Journey,
        template: "A heartwarming story about emotional healing and human connection",
        description: "emotional wounds healed by warmth",
        zh_description: "情感創傷被溫暖治癒",
    },
    MoodPairEntry {
        pair: ("melancholic", "comforting"),
        kind: Journey,
        template: "A gentle film that sits with sadness and slowly turns it into comfort",
        description: "sadness soothed into comfort",
        zh_description: "悲傷被慢慢安撫",
    },
    MoodPairEntry {
        pair: ("gritty", "inspiring"),
        kind: Journey,
        template: "A gritty struggle against hard reality that becomes an inspiring victory",
        description: "hard reality overcome",
        zh_description: "從殘酷現實中奮起",
    },
    MoodPairEntry {
        pair: ("bittersweet", "hopeful"),
        kind: Journey,
        template: "A bittersweet story where loss and hope walk side by side toward a new beginning",
        description: "loss carrying the seed of hope",
        zh_description: "苦澀中帶著新生的希望",
    },
    MoodPairEntry {
        pair: ("heartbreaking", "empowering"),
        kind: Journey,
        template: "A devastating loss that forges strength, a journey from heartbreak to empowerment",
        description: "pain forged into strength",
        zh_description: "從心碎中長出力量",
    },
    MoodPairEntry {
        pair: ("dark", "uplifting"),
        kind: Journey,
        template: "A story that starts in a dark place and climbs toward an uplifting resolution",
        description: "darkness climbing toward light",
        zh_description: "從黑暗爬向光明",
    },
    MoodPairEntry {
        pair: ("melancholic", "uplifting"),
        kind: Journey,
        template: "A melancholic beginning that blossoms into an uplifting, life-affirming ending",
        description: "melancholy blossoming into joy",
        zh_description: "憂傷綻放成喜悅",
    },
    MoodPairEntry {
        pair: ("melancholic", "inspiring"),
        kind: Journey,
        template: "A quiet sadness that slowly gathers into an inspiring story of perseverance",
        description: "sadness gathering into perseverance",
        zh_description: "憂傷凝聚成堅持的勇氣",
    },
    // ------------------------------------------------------------------
    // Paradox — contrasting moods held in tension
    // ------------------------------------------------------------------
    MoodPairEntry {
        pair: ("dark", "lighthearted"),
        kind: Paradox,
        template: "A film that blends dark themes with a lighthearted touch, finding humor in the shadows",
        description: "darkness and levity in tension",
        zh_description: "黑暗題材配上輕鬆筆觸",
    },
    MoodPairEntry {
        pair: ("dark", "funny"),
        kind: Paradox,
        template: "A darkly funny film where comedy grows out of bleak and uncomfortable places",
        description: "comedy grown from bleakness",
        zh_description: "從陰暗處長出的笑料",
    },
    MoodPairEntry {
        pair: ("dark", "whimsical"),
        kind: Paradox,
        template: "A whimsical fable wrapped around a dark core, playful on the surface and grim beneath",
        description: "playful surface, grim core",
        zh_description: "童趣外表下的黑暗內核",
    },
    MoodPairEntry {
        pair: ("terrifying", "funny"),
        kind: Paradox,
        template: "A horror comedy that swings between genuine scares and big laughs",
        description: "scares alternating with laughs",
        zh_description: "驚嚇與爆笑交錯",
    },
    MoodPairEntry {
        pair: ("creepy", "cozy"),
        kind: Paradox,
        template: "A strangely cozy kind of creepy, unsettling yet comfortable to sink into",
        description: "unsettling yet comfortable",
        zh_description: "詭異卻又莫名舒適",
    },
    MoodPairEntry {
        pair: ("gritty", "dreamy"),
        kind: Paradox,
        template: "A film where gritty reality dissolves into dreamlike imagery and back again",
        description: "harsh reality meets dream logic",
        zh_description: "粗糲現實與夢境交織",
    },
    MoodPairEntry {
        pair: ("heartwarming", "dark"),
        kind: Paradox,
        template: "A story that is warm and tender at heart despite its dark and heavy setting",
        description: "warmth inside darkness",
        zh_description: "黑暗背景中的溫暖",
    },
    MoodPairEntry {
        pair: ("melancholic", "funny"),
        kind: Paradox,
        template: "A sad comedy where laughter and melancholy share every scene",
        description: "laughter sharing scenes with sadness",
        zh_description: "笑著笑著就哭了",
    },
    MoodPairEntry {
        pair: ("romantic", "gritty"),
        kind: Paradox,
        template: "An unvarnished love story, romantic feeling set against gritty circumstance",
        description: "romance against rough reality",
        zh_description: "殘酷環境中的愛情",
    },
    MoodPairEntry {
        pair: ("cheerful", "dark"),
        kind: Paradox,
        template: "A film whose cheerful tone sits uneasily on top of something much darker",
        description: "cheer concealing darkness",
        zh_description: "明朗表面下的暗流",
    },
    MoodPairEntry {
        pair: ("fast-paced", "contemplative"),
        kind: Paradox,
        template: "A film that alternates breathless momentum with still, contemplative passages",
        description: "momentum against stillness",
        zh_description: "疾馳與靜止的交替",
    },
    MoodPairEntry {
        pair: ("lighthearted", "heartbreaking"),
        kind: Paradox,
        template: "A breezy, lighthearted film that lands an unexpectedly heartbreaking blow",
        description: "levity hiding heartbreak",
        zh_description: "輕快底下藏著心碎",
    },
    // ------------------------------------------------------------------
    // Intensification — same direction, doubled
    // ------------------------------------------------------------------
    MoodPairEntry {
        pair: ("emotional", "melancholic"),
        kind: Intensification,
        template: "A deeply emotional and melancholic story, profoundly moving and contemplative",
        description: "sadness deepened into catharsis",
        zh_description: "情感濃度拉滿的憂傷之作",
    },
    MoodPairEntry {
        pair: ("dark", "gritty"),
        kind: Intensification,
        template: "A relentlessly dark and gritty film, bleak, raw and uncompromising",
        description: "bleakness without relief",
        zh_description: "徹底的黑暗寫實",
    },
    MoodPairEntry {
        pair: ("intense", "thrilling"),
        kind: Intensification,
        template: "An intensely thrilling ride that never loosens its grip",
        description: "sustained white-knuckle tension",
        zh_description: "全程緊繃的刺激體驗",
    },
    MoodPairEntry {
        pair: ("funny", "cheerful"),
        kind: Intensification,
        template: "A relentlessly funny and cheerful crowd-pleaser, pure good spirits",
        description: "comedy stacked on good cheer",
        zh_description: "從頭笑到尾的歡樂",
    },
    MoodPairEntry {
        pair: ("terrifying", "creepy"),
        kind: Intensification,
        template: "A terrifying and deeply creepy film that lingers long after the credits",
        description: "dread layered on dread",
        zh_description: "餘悸繞樑的恐懼",
    },
    MoodPairEntry {
        pair: ("epic", "grand"),
        kind: Intensification,
        template: "A grand epic of sweeping scale and monumental stakes",
        description: "scale amplified by spectacle",
        zh_description: "氣勢磅礴的鉅作",
    },
    MoodPairEntry {
        pair: ("exciting", "action-packed"),
        kind: Intensification,
        template: "An exciting, action-packed spectacle with set piece after set piece",
        description: "action stacked on action",
        zh_description: "動作場面一波接一波",
    },
    MoodPairEntry {
        pair: ("cozy", "comforting"),
        kind: Intensification,
        template: "A cozy, comforting film like a warm blanket on a cold evening",
        description: "comfort doubled into a refuge",
        zh_description: "像暖爐一樣的電影",
    },
    MoodPairEntry {
        pair: ("suspenseful", "mysterious"),
        kind: Intensification,
        template: "A suspenseful mystery that tightens with every answered question",
        description: "suspense feeding the mystery",
        zh_description: "越解越深的懸念",
    },
    MoodPairEntry {
        pair: ("romantic", "passionate"),
        kind: Intensification,
        template: "A passionately romantic film, swept up entirely in its love story",
        description: "romance burned to full heat",
        zh_description: "濃烈至極的愛情",
    },
    MoodPairEntry {
        pair: ("thrilling", "fast-paced"),
        kind: Intensification,
        template: "A fast-paced thriller with no wasted minute and no place to breathe",
        description: "speed compounding tension",
        zh_description: "毫無冷場的追逐",
    },
    MoodPairEntry {
        pair: ("dreamy", "magical"),
        kind: Intensification,
        template: "A dreamy, magical film that floats somewhere just above reality",
        description: "dream logic and enchantment",
        zh_description: "漂浮在現實之上的魔幻",
    },
    MoodPairEntry {
        pair: ("thought-provoking", "philosophical"),
        kind: Intensification,
        template: "A thought-provoking, philosophical film that keeps asking questions after it ends",
        description: "ideas pursued to their depth",
        zh_description: "散場後仍在思考",
    },
    MoodPairEntry {
        pair: ("heartwarming", "feel-good"),
        kind: Intensification,
        template: "A heartwarming feel-good film built to leave you smiling",
        description: "warmth aimed straight at the heart",
        zh_description: "看完嘴角上揚",
    },
    MoodPairEntry {
        pair: ("dark", "moody"),
        kind: Intensification,
        template: "A dark, moody film thick with atmosphere and shadow",
        description: "darkness as atmosphere",
        zh_description: "陰鬱氛圍濃得化不開",
    },
    MoodPairEntry {
        pair: ("inspiring", "uplifting"),
        kind: Intensification,
        template: "An inspiring, uplifting story of people exceeding what anyone expected of them",
        description: "encouragement amplified",
        zh_description: "滿滿的正向能量",
    },
    MoodPairEntry {
        pair: ("melancholic", "moody"),
        kind: Intensification,
        template: "A melancholic, moody film that lives inside a long grey afternoon",
        description: "sadness as weather",
        zh_description: "灰色調的綿長憂傷",
    },
    MoodPairEntry {
        pair: ("mind-bending", "philosophical"),
        kind: Intensification,
        template: "A mind-bending, philosophical puzzle that rewires how you see its world",
        description: "puzzle box with ideas inside",
        zh_description: "顛覆認知的思辨謎題",
    },
    MoodPairEntry {
        pair: ("gritty", "realistic"),
        kind: Intensification,
        template: "A gritty, realistic film with documentary weight and no varnish",
        description: "realism pushed to rawness",
        zh_description: "不加修飾的真實",
    },
    MoodPairEntry {
        pair: ("atmospheric", "moody"),
        kind: Intensification,
        template: "An atmospheric, moody piece where tone carries more than plot",
        description: "tone as the main event",
        zh_description: "氛圍先於劇情",
    },
    MoodPairEntry {
        pair: ("escapist", "fantastical"),
        kind: Intensification,
        template: "A fantastical escape into a world built to be disappeared into",
        description: "escapism at full commitment",
        zh_description: "徹底遁入幻想世界",
    },
    // ------------------------------------------------------------------
    // Multi-faceted — independent facets layered together
    // ------------------------------------------------------------------
    MoodPairEntry {
        pair: ("romantic", "funny"),
        kind: MultiFaceted,
        template: "A romantic comedy balancing real affection with real laughs",
        description: "romance and comedy in balance",
        zh_description: "愛情與笑料並重",
    },
    MoodPairEntry {
        pair: ("epic", "emotional"),
        kind: MultiFaceted,
        template: "An epic canvas painted with intimate, emotional moments",
        description: "spectacle grounded in feeling",
        zh_description: "大場面中的小情感",
    },
    MoodPairEntry {
        pair: ("mysterious", "romantic"),
        kind: MultiFaceted,
        template: "A romance threaded through a mystery, each secret changing the relationship",
        description: "love entangled with secrets",
        zh_description: "愛情與謎團糾纏",
    },
    MoodPairEntry {
        pair: ("action-packed", "funny"),
        kind: MultiFaceted,
        template: "An action comedy trading punches and punchlines in equal measure",
        description: "stunts and jokes in rotation",
        zh_description: "動作與笑點輪番上陣",
    },
    MoodPairEntry {
        pair: ("thrilling", "romantic"),
        kind: MultiFaceted,
        template: "A thriller with a love story at its center, danger sharpening the romance",
        description: "danger sharpening romance",
        zh_description: "危機中的愛情",
    },
    MoodPairEntry {
        pair: ("adventurous", "heartwarming"),
        kind: MultiFaceted,
        template: "A heartwarming adventure where the journey matters less than who comes along",
        description: "adventure bound by affection",
        zh_description: "溫情滿滿的冒險旅程",
    },
    MoodPairEntry {
        pair: ("dark", "mind-bending"),
        kind: MultiFaceted,
        template: "A dark puzzle of a film, disorienting in structure and unsettling in tone",
        description: "disorientation with a dark edge",
        zh_description: "黑暗又燒腦的迷宮",
    },
];

/// Look up the matrix entry for an unordered pair of mood tags.
pub fn lookup_mood_pair(a: &str, b: &str) -> Option<&'static MoodPairEntry> {
    MOOD_RELATIONSHIP_MATRIX.iter().find(|entry| {
        let (x, y) = entry.pair;
        (x == a && y == b) || (x == b && y == a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood_tags::is_canonical_mood_tag;

    #[test]
    fn test_pairs_use_canonical_tags() {
        for entry in MOOD_RELATIONSHIP_MATRIX {
            assert!(is_canonical_mood_tag(entry.pair.0), "unknown: {}", entry.pair.0);
            assert!(is_canonical_mood_tag(entry.pair.1), "unknown: {}", entry.pair.1);
            assert_ne!(entry.pair.0, entry.pair.1);
        }
    }

    #[test]
    fn test_pairs_are_unique_unordered() {
        let mut seen = std::collections::HashSet::new();
        for entry in MOOD_RELATIONSHIP_MATRIX {
            let (a, b) = entry.pair;
            let key = if a < b { (a, b) } else { (b, a) };
            assert!(seen.insert(key), "duplicate pair: {key:?}");
        }
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let forward = lookup_mood_pair("dark", "lighthearted").unwrap();
        let backward = lookup_mood_pair("lighthearted", "dark").unwrap();
        assert_eq!(forward.template, backward.template);
        assert_eq!(forward.kind, RelationKind::Paradox);
    }

    #[test]
    fn test_emotional_melancholic_intensification() {
        let entry = lookup_mood_pair("emotional", "melancholic").unwrap();
        assert_eq!(entry.kind, RelationKind::Intensification);
        assert_eq!(
            entry.template,
            "A deeply emotional and melancholic story, profoundly moving and contemplative"
        );
    }

    #[test]
    fn test_absent_pair() {
        assert!(lookup_mood_pair("lighthearted", "funny").is_none());
        assert!(lookup_mood_pair("lighthearted", "exciting").is_none());
    }
}
