use crate::language::Language;

/// One literal per supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub zh: &'static str,
    pub en: &'static str,
    pub ja: &'static str,
    pub ko: &'static str,
    pub de: &'static str,
}

impl Translations {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Zh => self.zh,
            Language::En => self.en,
            Language::Ja => self.ja,
            Language::Ko => self.ko,
            Language::De => self.de,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchValue {
    /// Same literal in every language
    Constant(&'static str),
    Localized(Translations),
}

impl PatchValue {
    pub fn resolve(&self, language: Language) -> &'static str {
        match self {
            PatchValue::Constant(value) => *value,
            PatchValue::Localized(translations) => translations.get(language),
        }
    }
}

/// A key to insert under `section` (relative to the bundle namespace) when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchEntry {
    pub section: &'static [&'static str],
    pub key: &'static str,
    pub value: PatchValue,
}

impl PatchEntry {
    pub fn dotted_path(&self) -> String {
        let mut parts = self.section.to_vec();
        parts.push(self.key);
        parts.join(".")
    }
}

/// Placeholder shown when no option is selected
pub const NONE_OPTION: &str = "-";

const MODE: &[&str] = &["mode"];
const THEME: &[&str] = &["options", "theme"];
const MOOD: &[&str] = &["options", "mood"];
const STYLE: &[&str] = &["options", "style"];
const PLAYER: &[&str] = &["audio", "player"];
const AUDIO: &[&str] = &["audio"];
const TOASTS: &[&str] = &["toasts"];

/// Poem generator page keys, in evaluation order
pub static POEM_GENERATE_PATCHES: &[PatchEntry] = &[
    PatchEntry {
        section: MODE,
        key: "toggle_shortcut",
        value: PatchValue::Localized(Translations {
            zh: "切换",
            en: "to toggle",
            ja: "で切り替え",
            ko: "로 전환",
            de: "zum Umschalten",
        }),
    },
    PatchEntry {
        section: THEME,
        key: "none_option",
        value: PatchValue::Constant(NONE_OPTION),
    },
    PatchEntry {
        section: MOOD,
        key: "none_option",
        value: PatchValue::Constant(NONE_OPTION),
    },
    PatchEntry {
        section: STYLE,
        key: "none_option",
        value: PatchValue::Constant(NONE_OPTION),
    },
    PatchEntry {
        section: PLAYER,
        key: "stop",
        value: PatchValue::Localized(Translations {
            zh: "停止",
            en: "Stop",
            ja: "停止",
            ko: "중지",
            de: "Stoppen",
        }),
    },
    PatchEntry {
        section: PLAYER,
        key: "resume",
        value: PatchValue::Localized(Translations {
            zh: "继续",
            en: "Resume",
            ja: "再開",
            ko: "재개",
            de: "Fortsetzen",
        }),
    },
    PatchEntry {
        section: PLAYER,
        key: "speed_label",
        value: PatchValue::Localized(Translations {
            zh: "朗诵速度",
            en: "Recitation Speed",
            ja: "朗読速度",
            ko: "낭독 속도",
            de: "Vortragsgeschwindigkeit",
        }),
    },
    PatchEntry {
        section: PLAYER,
        key: "status_reading",
        value: PatchValue::Localized(Translations {
            zh: "朗诵中...",
            en: "Reading...",
            ja: "朗読中...",
            ko: "낭독 중...",
            de: "Lese vor...",
        }),
    },
    PatchEntry {
        section: PLAYER,
        key: "status_paused",
        value: PatchValue::Localized(Translations {
            zh: "已暂停",
            en: "Paused",
            ja: "一時停止中",
            ko: "일시정지됨",
            de: "Pausiert",
        }),
    },
    PatchEntry {
        section: AUDIO,
        key: "browser_not_supported",
        value: PatchValue::Localized(Translations {
            zh: "您的浏览器不支持语音朗诵功能",
            en: "Your browser does not support speech synthesis",
            ja: "お使いのブラウザは音声朗読機能をサポートしていません",
            ko: "브라우저가 음성 낭독 기능을 지원하지 않습니다",
            de: "Ihr Browser unterstützt die Sprachsynthese nicht",
        }),
    },
    PatchEntry {
        section: AUDIO,
        key: "tts_failed",
        value: PatchValue::Localized(Translations {
            zh: "朗诵失败，请重试",
            en: "Recitation failed, please try again",
            ja: "朗読に失敗しました。もう一度お試しください",
            ko: "낭독 실패, 다시 시도하세요",
            de: "Vortrag fehlgeschlagen, bitte versuchen Sie es erneut",
        }),
    },
    PatchEntry {
        section: TOASTS,
        key: "error_generate_poem_first",
        value: PatchValue::Localized(Translations {
            zh: "请先生成诗歌",
            en: "Please generate a poem first",
            ja: "まず詩を生成してください",
            ko: "먼저 시를 생성해주세요",
            de: "Bitte generieren Sie zuerst ein Gedicht",
        }),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn constant_ignores_language() {
        let value = PatchValue::Constant(NONE_OPTION);
        for lang in Language::ALL {
            assert_eq!(value.resolve(lang), "-");
        }
    }

    #[test]
    fn localized_selects_language() {
        let toggle = POEM_GENERATE_PATCHES[0];
        assert_eq!(toggle.dotted_path(), "mode.toggle_shortcut");
        assert_eq!(toggle.value.resolve(Language::En), "to toggle");
        assert_eq!(toggle.value.resolve(Language::Zh), "切换");
        assert_eq!(toggle.value.resolve(Language::De), "zum Umschalten");
    }

    #[test]
    fn patch_paths_are_unique() {
        let paths: HashSet<String> = POEM_GENERATE_PATCHES
            .iter()
            .map(PatchEntry::dotted_path)
            .collect();
        assert_eq!(paths.len(), POEM_GENERATE_PATCHES.len());
    }

    #[test]
    fn evaluation_order() {
        let order: Vec<String> = POEM_GENERATE_PATCHES
            .iter()
            .map(PatchEntry::dotted_path)
            .collect();
        assert_eq!(
            order,
            vec![
                "mode.toggle_shortcut",
                "options.theme.none_option",
                "options.mood.none_option",
                "options.style.none_option",
                "audio.player.stop",
                "audio.player.resume",
                "audio.player.speed_label",
                "audio.player.status_reading",
                "audio.player.status_paused",
                "audio.browser_not_supported",
                "audio.tts_failed",
                "toasts.error_generate_poem_first",
            ]
        );
    }
}
