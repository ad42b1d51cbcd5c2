use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleKey {
    EnUs,
    FrFr,
    DeDe,
    PtBr,
    JaJp,
    ZhCn,
}

impl LocaleKey {
    pub const ALL: [LocaleKey; 6] = [
        LocaleKey::EnUs,
        LocaleKey::FrFr,
        LocaleKey::DeDe,
        LocaleKey::PtBr,
        LocaleKey::JaJp,
        LocaleKey::ZhCn,
    ];

    /// Accepts `en_US` style identifiers; `en-US` is treated the same.
    pub fn parse(value: &str) -> Option<Self> {
        match value.replace('-', "_").as_str() {
            "en_US" => Some(Self::EnUs),
            "fr_FR" => Some(Self::FrFr),
            "de_DE" => Some(Self::DeDe),
            "pt_BR" => Some(Self::PtBr),
            "ja_JP" => Some(Self::JaJp),
            "zh_CN" => Some(Self::ZhCn),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
            Self::DeDe => "de_DE",
            Self::PtBr => "pt_BR",
            Self::JaJp => "ja_JP",
            Self::ZhCn => "zh_CN",
        }
    }

    pub fn supported() -> String {
        Self::ALL.map(LocaleKey::as_str).join(", ")
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
