/// Phrase used when a question/answer pair has no canned reason.
pub const FALLBACK_REASON: &str = "有共同的兴趣";

pub const REASONS: &[(&str, &[(&str, &str)])] = &[
    (
        "q1",
        &[
            ("reading", "都喜欢安静的阅读时光"),
            ("outdoor", "都热爱户外活动"),
            ("cafe", "都享受咖啡馆的悠闲"),
            ("cooking", "都热爱美食和烹饪"),
            ("music", "都有音乐情怀"),
            ("movie", "都喜爱电影艺术"),
        ],
    ),
    (
        "q2",
        &[
            ("pop", "音乐品味相似"),
            ("indie", "都喜欢独立音乐"),
            ("jazz", "都欣赏爵士乐"),
            ("classical", "都喜爱古典音乐"),
            ("rock", "都热爱摇滚"),
            ("folk", "都钟情民谣"),
        ],
    ),
    (
        "q3",
        &[
            ("dinner", "都喜欢浪漫的晚餐约会"),
            ("walk", "都享受散步聊天的时光"),
            ("activity", "都喜欢有趣的约会活动"),
            ("cafe", "都偏爱安静的咖啡馆约会"),
            ("concert", "都喜爱音乐会约会"),
            ("home", "都喜欢在家约会"),
        ],
    ),
    (
        "q4",
        &[
            ("stable", "生活态度都追求安稳"),
            ("adventure", "都有冒险精神"),
            ("balanced", "都重视生活平衡"),
            ("artistic", "都有艺术气质"),
            ("active", "都充满活力"),
            ("mindful", "都注重内心成长"),
        ],
    ),
    (
        "q5",
        &[
            ("reading", "都有阅读爱好"),
            ("sports", "都热爱运动"),
            ("art", "都有艺术爱好"),
            ("music", "都热爱音乐"),
            ("cooking", "都喜欢烹饪"),
            ("gaming", "都喜欢游戏"),
        ],
    ),
    (
        "q6",
        &[
            ("career", "都重视事业发展"),
            ("family", "都渴望建立家庭"),
            ("travel", "都梦想环游世界"),
            ("freedom", "都追求自由生活"),
            ("balance", "都追求平衡人生"),
            ("growth", "都注重个人成长"),
        ],
    ),
    (
        "q7",
        &[
            ("deep", "都渴望深度交流"),
            ("daily", "都喜欢分享日常"),
            ("humor", "都有幽默感"),
            ("written", "都喜欢文字表达"),
            ("direct", "都欣赏直接沟通"),
            ("action", "都相信行动胜于言语"),
        ],
    ),
    (
        "q8",
        &[
            ("honesty", "都看重诚实"),
            ("humor", "都欣赏幽默"),
            ("kindness", "都重视善良"),
            ("intelligence", "都欣赏智慧"),
            ("loyalty", "都看重忠诚"),
            ("freedom", "都尊重自由"),
        ],
    ),
    (
        "q9",
        &[
            ("romance", "都喜欢浪漫作品"),
            ("drama", "都欣赏文艺片"),
            ("scifi", "都喜欢科幻"),
            ("documentary", "都喜爱纪录片"),
            ("comedy", "都喜欢喜剧"),
            ("art", "都有艺术品味"),
        ],
    ),
    (
        "q10",
        &[
            ("soulmate", "都寻找灵魂伴侣"),
            ("companionship", "都渴望温暖陪伴"),
            ("passion", "都追求热烈爱情"),
            ("growth", "都希望共同成长"),
            ("fun", "都想要轻松快乐"),
            ("stable", "都追求稳定感情"),
        ],
    ),
];

/// Explanation for a shared preference, keyed on the first user's answer.
pub fn reason_for(question: &str, answer: &str) -> &'static str {
    REASONS
        .iter()
        .find(|(key, _)| *key == question)
        .and_then(|(_, phrases)| phrases.iter().find(|(code, _)| *code == answer))
        .map(|(_, phrase)| *phrase)
        .unwrap_or(FALLBACK_REASON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::weights::MATCH_WEIGHTS;

    #[test]
    fn every_weighted_answer_has_a_phrase() {
        for (question, rows) in MATCH_WEIGHTS {
            for row in rows.iter() {
                assert_ne!(
                    reason_for(question, row.answer),
                    FALLBACK_REASON,
                    "{question}/{}",
                    row.answer
                );
            }
        }
    }

    #[test]
    fn unknown_pairs_fall_back() {
        assert_eq!(reason_for("q1", "gaming"), FALLBACK_REASON);
        assert_eq!(reason_for("q42", "reading"), FALLBACK_REASON);
        assert_eq!(reason_for("q2", "jazz"), "都欣赏爵士乐");
    }
}
