//! Chinese topical word → English catalog keyword.
//!
//! Same substring-containment contract as [`crate::zh_mood`]. Values are the
//! lowercase keyword tokens stored on catalog movies.

/// Chinese topical surface form → English keyword (~67 entries).
pub const ZH_TO_EN_KEYWORDS: &[(&str, &str)] = &[
    ("時間旅行", "time travel"),
    ("时间旅行", "time travel"),
    ("穿越", "time travel"),
    ("外星", "alien"),
    ("太空", "space"),
    ("宇宙", "space"),
    ("機器人", "robot"),
    ("机器人", "robot"),
    ("人工智慧", "artificial intelligence"),
    ("人工智能", "artificial intelligence"),
    ("殭屍", "zombie"),
    ("喪屍", "zombie"),
    ("超級英雄", "superhero"),
    ("超级英雄", "superhero"),
    ("魔法", "magic"),
    ("巫師", "wizard"),
    ("吸血鬼", "vampire"),
    ("狼人", "werewolf"),
    ("鬼魂", "ghost"),
    ("惡魔", "demon"),
    ("神話", "mythology"),
    ("童話", "fairy tale"),
    ("恐龍", "dinosaur"),
    ("怪獸", "monster"),
    ("戰爭", "war"),
    ("战争", "war"),
    ("二戰", "world war ii"),
    ("犯罪", "crime"),
    ("偵探", "detective"),
    ("侦探", "detective"),
    ("謀殺", "murder"),
    ("謀殺案", "murder"),
    ("復仇", "revenge"),
    ("复仇", "revenge"),
    ("臥底", "undercover"),
    ("黑幫", "gangster"),
    ("黑帮", "gangster"),
    ("搶劫", "heist"),
    ("間諜", "spy"),
    ("间谍", "spy"),
    ("特務", "secret agent"),
    ("監獄", "prison"),
    ("越獄", "prison escape"),
    ("綁架", "kidnapping"),
    ("律師", "lawyer"),
    ("法庭", "courtroom"),
    ("醫生", "doctor"),
    ("音樂", "music"),
    ("音乐", "music"),
    ("舞蹈", "dance"),
    ("美食", "food"),
    ("廚師", "chef"),
    ("旅行", "travel"),
    ("公路", "road trip"),
    ("成長", "coming of age"),
    ("成长", "coming of age"),
    ("友情", "friendship"),
    ("親情", "family"),
    ("初戀", "first love"),
    ("婚禮", "wedding"),
    ("校園", "school"),
    ("青春", "youth"),
    ("運動", "sports"),
    ("拳擊", "boxing"),
    ("賽車", "racing"),
    ("賭博", "gambling"),
    ("病毒", "virus"),
    ("末日", "apocalypse"),
    ("災難", "disaster"),
    ("海洋", "ocean"),
    ("沙漠", "desert"),
    ("歷史", "history"),
    ("历史", "history"),
    ("傳記", "biography"),
    ("政治", "politics"),
    ("新聞", "journalism"),
    ("武術", "martial arts"),
    ("功夫", "kung fu"),
    ("忍者", "ninja"),
    ("西部", "western"),
    ("心理", "psychology"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (zh, _) in ZH_TO_EN_KEYWORDS {
            assert!(seen.insert(*zh), "duplicate key: {zh}");
        }
    }

    #[test]
    fn test_values_are_lowercase() {
        for (_, en) in ZH_TO_EN_KEYWORDS {
            assert_eq!(*en, en.to_lowercase());
        }
    }

    #[test]
    fn test_substring_extraction() {
        let query = "想看時間旅行和機器人的電影";
        let matched: Vec<&str> = ZH_TO_EN_KEYWORDS
            .iter()
            .filter(|(zh, _)| query.contains(zh))
            .map(|(_, en)| *en)
            .collect();
        assert_eq!(matched, vec!["time travel", "robot"]);
    }
}
