//! The four quick-start questions and the canned answers used when the
//! remote service is unavailable and canned fallback is enabled.

/// A fixed quick-start question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetQuestion {
    pub question: &'static str,
    pub canned_answer: &'static str,
}

pub const PRESETS: [PresetQuestion; 4] = [
    PresetQuestion {
        question: "草鱼患溃疡病如何治疗？",
        canned_answer: "草鱼溃疡病治疗建议：1. 隔离病鱼；2. 使用5%盐水浸泡10-15分钟；3. 水体内添加适量抗生素；4. 改善水质，增加氧气供应。",
    },
    PresetQuestion {
        question: "鲢鱼同时患眼部病变、鳍部病变如何治疗？",
        canned_answer: "鲢鱼眼部和鳍部病变综合治疗：1. 使用0.3-0.5mg/L的二氧化氯全池泼洒；2. 饲料中添加维生素C和抗生素；3. 提高水温至适宜范围；4. 定期换水保持水质清洁。",
    },
    PresetQuestion {
        question: "幼苗期鳙鱼患溃疡病如何治疗？",
        canned_answer: "幼苗期鳙鱼溃疡病需谨慎处理：1. 使用低浓度(3%)盐水短时间浸泡；2. 水体内添加专用鱼药，按说明减半使用；3. 增加水体溶氧量；4. 少量多次投喂高品质饲料。",
    },
    PresetQuestion {
        question: "当鱼出现腐烂鳃时如何快速治疗？",
        canned_answer: "腐烂鳃急效处理：1. 立即隔离病鱼；2. 使用0.5%盐水和适量高锰酸钾溶液浸泡15分钟；3. 全池泼洒杀菌剂；4. 加强过滤系统，增加水体循环。",
    },
];

/// Canned answer for questions that match no preset.
pub const GENERIC_ADVICE: &str = "根据您的问题，建议采取以下措施：1. 隔离患病鱼类；2. 改善水质条件；3. 使用适当的鱼类药物治疗；4. 咨询专业鱼类疾病专家获取具体治疗方案。";

/// Preset by 1-based position, as shown to the user.
pub fn by_number(number: usize) -> Option<&'static PresetQuestion> {
    number.checked_sub(1).and_then(|i| PRESETS.get(i))
}

/// Exact-match lookup; no normalisation is applied.
pub fn find(question: &str) -> Option<&'static PresetQuestion> {
    PRESETS.iter().find(|p| p.question == question)
}

/// The preset's canned answer, or the generic advice text.
pub fn canned_answer(question: &str) -> &'static str {
    find(question).map_or(GENERIC_ADVICE, |p| p.canned_answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_distinct_presets() {
        assert_eq!(PRESETS.len(), 4);
        for (i, a) in PRESETS.iter().enumerate() {
            assert!(!a.question.is_empty());
            assert!(!a.canned_answer.is_empty());
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.question, b.question);
            }
        }
    }

    #[test]
    fn numbering_is_one_based() {
        assert_eq!(by_number(1).unwrap().question, "草鱼患溃疡病如何治疗？");
        assert_eq!(by_number(4).unwrap().question, "当鱼出现腐烂鳃时如何快速治疗？");
        assert!(by_number(0).is_none());
        assert!(by_number(5).is_none());
    }

    #[test]
    fn canned_answer_for_preset() {
        assert!(canned_answer("草鱼患溃疡病如何治疗？").starts_with("草鱼溃疡病治疗建议"));
    }

    #[test]
    fn canned_answer_requires_exact_match() {
        assert_eq!(canned_answer("草鱼患溃疡病如何治疗"), GENERIC_ADVICE);
        assert_eq!(canned_answer(" 草鱼患溃疡病如何治疗？"), GENERIC_ADVICE);
        assert_eq!(canned_answer("鲈鱼怎么养？"), GENERIC_ADVICE);
    }
}
