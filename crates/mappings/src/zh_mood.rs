//! Chinese mood expression → canonical English mood tag.
//!
//! Extraction is exact substring containment over the user's query text, so
//! every key is a surface form at least two characters long. Several keys may
//! map to the same canonical tag; the extractor deduplicates. Keys cover the
//! traditional-script forms the frontend produces, plus the simplified forms
//! that show up in pasted text.

/// Chinese mood surface form → canonical mood tag (~230 entries).
pub const ZH_TO_EN_MOOD: &[(&str, &str)] = &[
    // hopeful
    ("有希望", "hopeful"),
    ("充滿希望", "hopeful"),
    ("希望感", "hopeful"),
    ("燃起希望", "hopeful"),
    ("看見希望", "hopeful"),
    ("充满希望", "hopeful"),
    // inspiring
    ("勵志", "inspiring"),
    ("励志", "inspiring"),
    ("激勵人心", "inspiring"),
    ("鼓舞人心", "inspiring"),
    ("鼓舞", "inspiring"),
    ("正能量", "inspiring"),
    // emotional
    ("感人", "emotional"),
    ("催淚", "emotional"),
    ("催泪", "emotional"),
    ("感動", "emotional"),
    ("感动", "emotional"),
    ("動人", "emotional"),
    ("觸動人心", "emotional"),
    ("情感豐富", "emotional"),
    // uplifting
    ("振奮", "uplifting"),
    ("振奋", "uplifting"),
    ("提振心情", "uplifting"),
    ("打起精神", "uplifting"),
    ("心情變好", "uplifting"),
    // heartwarming
    ("溫馨", "heartwarming"),
    ("温馨", "heartwarming"),
    ("溫暖", "heartwarming"),
    ("温暖", "heartwarming"),
    ("暖心", "heartwarming"),
    ("窩心", "heartwarming"),
    // intense
    ("張力十足", "intense"),
    ("高張力", "intense"),
    ("強烈", "intense"),
    ("激烈", "intense"),
    ("緊張刺激", "intense"),
    // dark
    ("黑暗", "dark"),
    ("陰暗", "dark"),
    ("阴暗", "dark"),
    ("暗黑", "dark"),
    ("黑色調", "dark"),
    // thrilling
    ("刺激", "thrilling"),
    ("驚險", "thrilling"),
    ("惊险", "thrilling"),
    ("扣人心弦", "thrilling"),
    ("腎上腺素", "thrilling"),
    // suspenseful
    ("懸疑感", "suspenseful"),
    ("悬疑感", "suspenseful"),
    ("懸念", "suspenseful"),
    ("吊人胃口", "suspenseful"),
    ("屏息", "suspenseful"),
    // thought-provoking
    ("發人深省", "thought-provoking"),
    ("发人深省", "thought-provoking"),
    ("引人深思", "thought-provoking"),
    ("值得思考", "thought-provoking"),
    ("省思", "thought-provoking"),
    // funny
    ("好笑", "funny"),
    ("搞笑", "funny"),
    ("爆笑", "funny"),
    ("幽默", "funny"),
    ("笑到肚子痛", "funny"),
    ("喜感", "funny"),
    // lighthearted
    ("輕鬆", "lighthearted"),
    ("轻松", "lighthearted"),
    ("輕快", "lighthearted"),
    ("不用動腦", "lighthearted"),
    ("無負擔", "lighthearted"),
    // whimsical
    ("奇趣", "whimsical"),
    ("古靈精怪", "whimsical"),
    ("異想天開", "whimsical"),
    ("童趣", "whimsical"),
    // cheerful
    ("開朗", "cheerful"),
    ("歡樂", "cheerful"),
    ("欢乐", "cheerful"),
    ("愉快", "cheerful"),
    ("歡快", "cheerful"),
    // feel-good
    ("愉悅", "feel-good"),
    ("好心情", "feel-good"),
    ("心情愉悅", "feel-good"),
    ("看完心情好", "feel-good"),
    ("舒心", "feel-good"),
    // romantic
    ("浪漫", "romantic"),
    ("戀愛感", "romantic"),
    ("恋爱感", "romantic"),
    ("甜蜜", "romantic"),
    ("粉紅泡泡", "romantic"),
    // passionate
    ("熱情", "passionate"),
    ("热情", "passionate"),
    ("激情", "passionate"),
    ("熾熱", "passionate"),
    ("熱烈", "passionate"),
    // bittersweet
    ("苦樂參半", "bittersweet"),
    ("甜中帶苦", "bittersweet"),
    ("酸甜", "bittersweet"),
    ("苦澀又美好", "bittersweet"),
    ("遺憾", "bittersweet"),
    ("遗憾", "bittersweet"),
    // melancholic
    ("難過", "melancholic"),
    ("难过", "melancholic"),
    ("悲傷", "melancholic"),
    ("悲伤", "melancholic"),
    ("憂鬱", "melancholic"),
    ("忧郁", "melancholic"),
    ("憂傷", "melancholic"),
    ("哀傷", "melancholic"),
    ("傷感", "melancholic"),
    ("低落", "melancholic"),
    // epic
    ("史詩", "epic"),
    ("史诗", "epic"),
    ("磅礴", "epic"),
    ("宏大敘事", "epic"),
    ("壯闊", "epic"),
    // grand
    ("壯麗", "grand"),
    ("氣勢恢宏", "grand"),
    ("大場面", "grand"),
    ("華麗", "grand"),
    // adventurous
    ("冒險", "adventurous"),
    ("冒险", "adventurous"),
    ("探險", "adventurous"),
    ("歷險", "adventurous"),
    ("冒險精神", "adventurous"),
    // exciting
    ("興奮", "exciting"),
    ("热血", "exciting"),
    ("熱血", "exciting"),
    ("高潮迭起", "exciting"),
    ("過癮", "exciting"),
    // action-packed
    ("動作滿滿", "action-packed"),
    ("打鬥", "action-packed"),
    ("武打", "action-packed"),
    ("動作場面", "action-packed"),
    ("火爆", "action-packed"),
    // terrifying
    ("恐怖", "terrifying"),
    ("嚇人", "terrifying"),
    ("吓人", "terrifying"),
    ("駭人", "terrifying"),
    ("毛骨悚然", "terrifying"),
    // creepy
    ("詭異", "creepy"),
    ("诡异", "creepy"),
    ("陰森", "creepy"),
    ("毛毛的", "creepy"),
    ("怪誕", "creepy"),
    // disturbing
    ("令人不安", "disturbing"),
    ("令人不適", "disturbing"),
    ("衝擊性", "disturbing"),
    ("震撼不安", "disturbing"),
    // mysterious
    ("神秘", "mysterious"),
    ("神祕", "mysterious"),
    ("謎團", "mysterious"),
    ("撲朔迷離", "mysterious"),
    ("謎樣", "mysterious"),
    // cozy
    ("舒適", "cozy"),
    ("舒适", "cozy"),
    ("慵懶", "cozy"),
    ("小確幸", "cozy"),
    ("暖呼呼", "cozy"),
    // relaxing
    ("放鬆", "relaxing"),
    ("放松", "relaxing"),
    ("紓壓", "relaxing"),
    ("舒壓", "relaxing"),
    ("解壓", "relaxing"),
    ("沒壓力", "relaxing"),
    // comforting
    ("治癒", "comforting"),
    ("治愈", "comforting"),
    ("療癒", "comforting"),
    ("疗愈", "comforting"),
    ("安慰", "comforting"),
    ("撫慰", "comforting"),
    // gritty
    ("寫實殘酷", "gritty"),
    ("粗糲", "gritty"),
    ("血淋淋", "gritty"),
    ("硬派", "gritty"),
    ("殘酷", "gritty"),
    // realistic
    ("寫實", "realistic"),
    ("写实", "realistic"),
    ("真實感", "realistic"),
    ("貼近現實", "realistic"),
    ("現實感", "realistic"),
    // atmospheric
    ("氛圍感", "atmospheric"),
    ("氣氛濃厚", "atmospheric"),
    ("氛圍強烈", "atmospheric"),
    ("情調", "atmospheric"),
    // moody
    ("陰鬱", "moody"),
    ("阴郁", "moody"),
    ("憂鬱氛圍", "moody"),
    ("情緒化", "moody"),
    ("低迷", "moody"),
    // dreamy
    ("夢幻", "dreamy"),
    ("梦幻", "dreamy"),
    ("如夢似幻", "dreamy"),
    ("飄渺", "dreamy"),
    ("唯美", "dreamy"),
    // fast-paced
    ("節奏快", "fast-paced"),
    ("快節奏", "fast-paced"),
    ("快节奏", "fast-paced"),
    ("緊湊", "fast-paced"),
    ("毫無冷場", "fast-paced"),
    // contemplative
    ("沉思", "contemplative"),
    ("內省", "contemplative"),
    ("靜謐", "contemplative"),
    ("慢節奏", "contemplative"),
    ("慢慢咀嚼", "contemplative"),
    // mind-bending
    ("燒腦", "mind-bending"),
    ("烧脑", "mind-bending"),
    ("腦洞大開", "mind-bending"),
    ("劇情反轉", "mind-bending"),
    ("顛覆認知", "mind-bending"),
    ("大反轉", "mind-bending"),
    // philosophical
    ("哲學", "philosophical"),
    ("哲学", "philosophical"),
    ("哲理", "philosophical"),
    ("人生思考", "philosophical"),
    ("存在主義", "philosophical"),
    // heartbreaking
    ("心碎", "heartbreaking"),
    ("心痛", "heartbreaking"),
    ("虐心", "heartbreaking"),
    ("撕心裂肺", "heartbreaking"),
    ("悲慟", "heartbreaking"),
    // empowering
    ("自我成長", "empowering"),
    ("找回自己", "empowering"),
    ("變強", "empowering"),
    ("女力", "empowering"),
    // escapist
    ("逃避現實", "escapist"),
    ("抽離現實", "escapist"),
    ("放空", "escapist"),
    ("遠離煩惱", "escapist"),
    // fantastical
    ("天馬行空", "fantastical"),
    ("超現實", "fantastical"),
    ("奇幻感", "fantastical"),
    ("幻想", "fantastical"),
    // magical
    ("魔幻", "magical"),
    ("奇蹟感", "magical"),
    ("魔力", "magical"),
    // imaginative
    ("想像力", "imaginative"),
    ("富有創意", "imaginative"),
    ("創意十足", "imaginative"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood_tags::is_canonical_mood_tag;

    #[test]
    fn test_all_values_are_canonical() {
        for (zh, en) in ZH_TO_EN_MOOD {
            assert!(is_canonical_mood_tag(en), "{zh} maps to unknown tag {en}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (zh, _) in ZH_TO_EN_MOOD {
            assert!(seen.insert(*zh), "duplicate key: {zh}");
        }
    }

    #[test]
    fn test_sad_query_matches_exactly_one_tag() {
        let query = "難過的時候適合看什麼電影";
        let matched: Vec<&str> = ZH_TO_EN_MOOD
            .iter()
            .filter(|(zh, _)| query.contains(zh))
            .map(|(_, en)| *en)
            .collect();
        assert_eq!(matched, vec!["melancholic"]);
    }
}
