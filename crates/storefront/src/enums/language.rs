//! ISO 639-1 language codes supported by Shopify.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// Language codes supported by Shopify.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LanguageCode {
    /// Afrikaans.
    Af,
    /// Akan.
    Ak,
    /// Amharic.
    Am,
    /// Arabic.
    Ar,
    /// Assamese.
    As,
    /// Azerbaijani.
    Az,
    /// Belarusian.
    Be,
    /// Bulgarian.
    Bg,
    /// Bambara.
    Bm,
    /// Bangla.
    Bn,
    /// Tibetan.
    Bo,
    /// Breton.
    Br,
    /// Bosnian.
    Bs,
    /// Catalan.
    Ca,
    /// Chechen.
    Ce,
    /// Central Kurdish.
    Ckb,
    /// Czech.
    Cs,
    /// Church Slavic.
    Cu,
    /// Welsh.
    Cy,
    /// Danish.
    Da,
    /// German.
    De,
    /// Dzongkha.
    Dz,
    /// Ewe.
    Ee,
    /// Greek.
    El,
    /// English.
    En,
    /// Esperanto.
    Eo,
    /// Spanish.
    Es,
    /// Estonian.
    Et,
    /// Basque.
    Eu,
    /// Persian.
    Fa,
    /// Fulah.
    Ff,
    /// Finnish.
    Fi,
    /// Filipino.
    Fil,
    /// Faroese.
    Fo,
    /// French.
    Fr,
    /// Western Frisian.
    Fy,
    /// Irish.
    Ga,
    /// Scottish Gaelic.
    Gd,
    /// Galician.
    Gl,
    /// Gujarati.
    Gu,
    /// Manx.
    Gv,
    /// Hausa.
    Ha,
    /// Hebrew.
    He,
    /// Hindi.
    Hi,
    /// Croatian.
    Hr,
    /// Hungarian.
    Hu,
    /// Armenian.
    Hy,
    /// Interlingua.
    Ia,
    /// Indonesian.
    Id,
    /// Igbo.
    Ig,
    /// Sichuan Yi.
    Ii,
    /// Icelandic.
    Is,
    /// Italian.
    It,
    /// Japanese.
    Ja,
    /// Javanese.
    Jv,
    /// Georgian.
    Ka,
    /// Kikuyu.
    Ki,
    /// Kazakh.
    Kk,
    /// Kalaallisut.
    Kl,
    /// Khmer.
    Km,
    /// Kannada.
    Kn,
    /// Korean.
    Ko,
    /// Kashmiri.
    Ks,
    /// Kurdish.
    Ku,
    /// Cornish.
    Kw,
    /// Kyrgyz.
    Ky,
    /// Latin.
    La,
    /// Luxembourgish.
    Lb,
    /// Ganda.
    Lg,
    /// Lingala.
    Ln,
    /// Lao.
    Lo,
    /// Lithuanian.
    Lt,
    /// Luba-Katanga.
    Lu,
    /// Latvian.
    Lv,
    /// Malagasy.
    Mg,
    /// Māori.
    Mi,
    /// Macedonian.
    Mk,
    /// Malayalam.
    Ml,
    /// Mongolian.
    Mn,
    /// Moldavian.
    Mo,
    /// Marathi.
    Mr,
    /// Malay.
    Ms,
    /// Maltese.
    Mt,
    /// Burmese.
    My,
    /// Norwegian (Bokmål).
    Nb,
    /// North Ndebele.
    Nd,
    /// Nepali.
    Ne,
    /// Dutch.
    Nl,
    /// Norwegian Nynorsk.
    Nn,
    /// Norwegian.
    No,
    /// Oromo.
    Om,
    /// Odia.
    Or,
    /// Ossetic.
    Os,
    /// Punjabi.
    Pa,
    /// Polish.
    Pl,
    /// Pashto.
    Ps,
    /// Portuguese.
    Pt,
    /// Portuguese (Brazil).
    PtBr,
    /// Portuguese (Portugal).
    PtPt,
    /// Quechua.
    Qu,
    /// Romansh.
    Rm,
    /// Rundi.
    Rn,
    /// Romanian.
    Ro,
    /// Russian.
    Ru,
    /// Kinyarwanda.
    Rw,
    /// Sanskrit.
    Sa,
    /// Sardinian.
    Sc,
    /// Sindhi.
    Sd,
    /// Northern Sami.
    Se,
    /// Sango.
    Sg,
    /// Serbo-Croatian.
    Sh,
    /// Sinhala.
    Si,
    /// Slovak.
    Sk,
    /// Slovenian.
    Sl,
    /// Shona.
    Sn,
    /// Somali.
    So,
    /// Albanian.
    Sq,
    /// Serbian.
    Sr,
    /// Sundanese.
    Su,
    /// Swedish.
    Sv,
    /// Swahili.
    Sw,
    /// Tamil.
    Ta,
    /// Telugu.
    Te,
    /// Tajik.
    Tg,
    /// Thai.
    Th,
    /// Tigrinya.
    Ti,
    /// Turkmen.
    Tk,
    /// Tongan.
    To,
    /// Turkish.
    Tr,
    /// Tatar.
    Tt,
    /// Uyghur.
    Ug,
    /// Ukrainian.
    Uk,
    /// Urdu.
    Ur,
    /// Uzbek.
    Uz,
    /// Vietnamese.
    Vi,
    /// Volapük.
    Vo,
    /// Wolof.
    Wo,
    /// Xhosa.
    Xh,
    /// Yiddish.
    Yi,
    /// Yoruba.
    Yo,
    /// Chinese.
    Zh,
    /// Chinese (Simplified).
    ZhCn,
    /// Chinese (Traditional).
    ZhTw,
    /// Zulu.
    Zu,
}

impl_schema_enum!(LanguageCode);

impl LanguageCode {
    /// The BCP 47 tag for the language (e.g. `pt-BR`).
    #[must_use]
    pub fn bcp47(self) -> String {
        let literal: &'static str = self.into();
        match literal.split_once('_') {
            Some((language, region)) => format!("{}-{region}", language.to_ascii_lowercase()),
            None => literal.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_literals() {
        assert_eq!(LanguageCode::ZhTw.to_string(), "ZH_TW");
        assert_eq!("PT_PT".parse::<LanguageCode>().unwrap(), LanguageCode::PtPt);
        assert_eq!(LanguageCode::Fil.to_string(), "FIL");
    }

    #[test]
    fn test_bcp47() {
        assert_eq!(LanguageCode::En.bcp47(), "en");
        assert_eq!(LanguageCode::PtBr.bcp47(), "pt-BR");
    }
}
