//! The game's dialogue scripts.

use hanja_engine::{LineSet, Voice};

const INTRO_LINES: [&str; 7] = [
    "하...",
    "다음 주가 벌써 한자 8급 시험이네",
    "책만 보면 왜 이렇게 잠이 오냐...",
    "응? (모니터를 발견하며)",
    "'할수록 머리가 좋아지는 게임'?",
    "세상에 그런 게임이 어딨어~",
    "에이, 속는 셈 치고 딱 한 판만 해볼까?",
];

const BORI_LINES: [&str; 4] = [
    "멍! 안녕? 나는 이 마을을 지키는 보리야.",
    "한자 마을에 온 걸 환영해!",
    "한자를 하나씩 익힐 때마다 마을이 다시 밝아질 거야.",
    "자, 첫 번째 스테이지로 가 볼까?",
];

/// Which dialogue is running. Each script knows its own lines and narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Opening monologue, narrated.
    Intro,
    /// Village guide dog, unvoiced.
    Bori,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::Intro => "intro",
            Script::Bori => "bori",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "intro" => Some(Script::Intro),
            "bori" => Some(Script::Bori),
            _ => None,
        }
    }

    pub fn line_set(self) -> LineSet {
        match self {
            Script::Intro => {
                let clips = (1..=INTRO_LINES.len()).map(|n| Some(format!("intro_{n}"))).collect();
                LineSet::new(self.name(), INTRO_LINES).with_voice(Voice::Clips(clips))
            }
            Script::Bori => LineSet::new(self.name(), BORI_LINES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_is_narrated_line_by_line() {
        let set = Script::Intro.line_set();
        assert_eq!(set.len(), 7);
        assert_eq!(set.clip(0), Some("intro_1"));
        assert_eq!(set.clip(6), Some("intro_7"));
    }

    #[test]
    fn bori_is_silent() {
        let set = Script::Bori.line_set();
        assert_eq!(set.len(), 4);
        assert!((0..set.len()).all(|i| set.clip(i).is_none()));
    }

    #[test]
    fn names_round_trip() {
        for script in [Script::Intro, Script::Bori] {
            assert_eq!(Script::from_name(script.name()), Some(script));
        }
    }
}
