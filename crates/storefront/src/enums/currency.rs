//! ISO 4217 currency codes.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// The three-letter currency codes that represent the world currencies used
/// in stores. These include standard ISO 4217 codes, legacy codes, and
/// non-standard codes.
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
pub enum CurrencyCode {
    /// United Arab Emirates Dirham (AED).
    Aed,
    /// Afghan Afghani (AFN).
    Afn,
    /// Albanian Lek (ALL).
    All,
    /// Armenian Dram (AMD).
    Amd,
    /// Netherlands Antillean Guilder (ANG).
    Ang,
    /// Angolan Kwanza (AOA).
    Aoa,
    /// Argentine Pesos (ARS).
    Ars,
    /// Australian Dollars (AUD).
    Aud,
    /// Aruban Florin (AWG).
    Awg,
    /// Azerbaijani Manat (AZN).
    Azn,
    /// Bosnia and Herzegovina Convertible Mark (BAM).
    Bam,
    /// Barbadian Dollar (BBD).
    Bbd,
    /// Bangladesh Taka (BDT).
    Bdt,
    /// Bulgarian Lev (BGN).
    Bgn,
    /// Bahraini Dinar (BHD).
    Bhd,
    /// Burundian Franc (BIF).
    Bif,
    /// Bermudian Dollar (BMD).
    Bmd,
    /// Brunei Dollar (BND).
    Bnd,
    /// Bolivian Boliviano (BOB).
    Bob,
    /// Brazilian Real (BRL).
    Brl,
    /// Bahamian Dollar (BSD).
    Bsd,
    /// Bhutanese Ngultrum (BTN).
    Btn,
    /// Botswana Pula (BWP).
    Bwp,
    /// Belarusian Ruble (BYN).
    Byn,
    /// Belarusian Ruble. Deprecated: use `BYN` instead (BYR).
    Byr,
    /// Belize Dollar (BZD).
    Bzd,
    /// Canadian Dollars (CAD).
    Cad,
    /// Congolese franc (CDF).
    Cdf,
    /// Swiss Francs (CHF).
    Chf,
    /// Chilean Peso (CLP).
    Clp,
    /// Chinese Yuan Renminbi (CNY).
    Cny,
    /// Colombian Peso (COP).
    Cop,
    /// Costa Rican Colones (CRC).
    Crc,
    /// Cape Verdean escudo (CVE).
    Cve,
    /// Czech Koruny (CZK).
    Czk,
    /// Djiboutian Franc (DJF).
    Djf,
    /// Danish Kroner (DKK).
    Dkk,
    /// Dominican Peso (DOP).
    Dop,
    /// Algerian Dinar (DZD).
    Dzd,
    /// Egyptian Pound (EGP).
    Egp,
    /// Eritrean Nakfa (ERN).
    Ern,
    /// Ethiopian Birr (ETB).
    Etb,
    /// Euro (EUR).
    Eur,
    /// Fijian Dollars (FJD).
    Fjd,
    /// Falkland Islands Pounds (FKP).
    Fkp,
    /// United Kingdom Pounds (GBP).
    Gbp,
    /// Georgian Lari (GEL).
    Gel,
    /// Ghanaian Cedi (GHS).
    Ghs,
    /// Gibraltar Pounds (GIP).
    Gip,
    /// Gambian Dalasi (GMD).
    Gmd,
    /// Guinean Franc (GNF).
    Gnf,
    /// Guatemalan Quetzal (GTQ).
    Gtq,
    /// Guyanese Dollar (GYD).
    Gyd,
    /// Hong Kong Dollars (HKD).
    Hkd,
    /// Honduran Lempira (HNL).
    Hnl,
    /// Croatian Kuna (HRK).
    Hrk,
    /// Haitian Gourde (HTG).
    Htg,
    /// Hungarian Forint (HUF).
    Huf,
    /// Indonesian Rupiah (IDR).
    Idr,
    /// Israeli New Shekel (ILS).
    Ils,
    /// Indian Rupees (INR).
    Inr,
    /// Iraqi Dinar (IQD).
    Iqd,
    /// Iranian Rial (IRR).
    Irr,
    /// Icelandic Kronur (ISK).
    Isk,
    /// Jersey Pound (JEP).
    Jep,
    /// Jamaican Dollars (JMD).
    Jmd,
    /// Jordanian Dinar (JOD).
    Jod,
    /// Japanese Yen (JPY).
    Jpy,
    /// Kenyan Shilling (KES).
    Kes,
    /// Kyrgyzstani Som (KGS).
    Kgs,
    /// Cambodian Riel (KHR).
    Khr,
    /// Kiribati Dollar (KID).
    Kid,
    /// Comorian Franc (KMF).
    Kmf,
    /// South Korean Won (KRW).
    Krw,
    /// Kuwaiti Dinar (KWD).
    Kwd,
    /// Cayman Dollars (KYD).
    Kyd,
    /// Kazakhstani Tenge (KZT).
    Kzt,
    /// Laotian Kip (LAK).
    Lak,
    /// Lebanese Pounds (LBP).
    Lbp,
    /// Sri Lankan Rupees (LKR).
    Lkr,
    /// Liberian Dollar (LRD).
    Lrd,
    /// Lesotho Loti (LSL).
    Lsl,
    /// Lithuanian Litai (LTL).
    Ltl,
    /// Latvian Lati (LVL).
    Lvl,
    /// Libyan Dinar (LYD).
    Lyd,
    /// Moroccan Dirham (MAD).
    Mad,
    /// Moldovan Leu (MDL).
    Mdl,
    /// Malagasy Ariary (MGA).
    Mga,
    /// Macedonia Denar (MKD).
    Mkd,
    /// Burmese Kyat (MMK).
    Mmk,
    /// Mongolian Tugrik (MNT).
    Mnt,
    /// Macanese Pataca (MOP).
    Mop,
    /// Mauritanian Ouguiya (MRU).
    Mru,
    /// Mauritian Rupee (MUR).
    Mur,
    /// Maldivian Rufiyaa (MVR).
    Mvr,
    /// Malawian Kwacha (MWK).
    Mwk,
    /// Mexican Pesos (MXN).
    Mxn,
    /// Malaysian Ringgits (MYR).
    Myr,
    /// Mozambican Metical (MZN).
    Mzn,
    /// Namibian Dollar (NAD).
    Nad,
    /// Nigerian Naira (NGN).
    Ngn,
    /// Nicaraguan Córdoba (NIO).
    Nio,
    /// Norwegian Kroner (NOK).
    Nok,
    /// Nepalese Rupee (NPR).
    Npr,
    /// New Zealand Dollars (NZD).
    Nzd,
    /// Omani Rial (OMR).
    Omr,
    /// Panamian Balboa (PAB).
    Pab,
    /// Peruvian Nuevo Sol (PEN).
    Pen,
    /// Papua New Guinean Kina (PGK).
    Pgk,
    /// Philippine Peso (PHP).
    Php,
    /// Pakistani Rupee (PKR).
    Pkr,
    /// Polish Zlotych (PLN).
    Pln,
    /// Paraguayan Guarani (PYG).
    Pyg,
    /// Qatari Rial (QAR).
    Qar,
    /// Romanian Lei (RON).
    Ron,
    /// Serbian dinar (RSD).
    Rsd,
    /// Russian Rubles (RUB).
    Rub,
    /// Rwandan Franc (RWF).
    Rwf,
    /// Saudi Riyal (SAR).
    Sar,
    /// Solomon Islands Dollar (SBD).
    Sbd,
    /// Seychellois Rupee (SCR).
    Scr,
    /// Sudanese Pound (SDG).
    Sdg,
    /// Swedish Kronor (SEK).
    Sek,
    /// Singapore Dollars (SGD).
    Sgd,
    /// Saint Helena Pounds (SHP).
    Shp,
    /// Sierra Leonean Leone (SLE).
    Sle,
    /// Sierra Leonean Leone (pre-2022) (SLL).
    Sll,
    /// Somali Shilling (SOS).
    Sos,
    /// Surinamese Dollar (SRD).
    Srd,
    /// South Sudanese Pound (SSP).
    Ssp,
    /// Sao Tome And Principe Dobra. Deprecated: use `STN` instead (STD).
    Std,
    /// Sao Tome And Principe Dobra (STN).
    Stn,
    /// Syrian Pound (SYP).
    Syp,
    /// Swazi Lilangeni (SZL).
    Szl,
    /// Thai baht (THB).
    Thb,
    /// Tajikistani Somoni (TJS).
    Tjs,
    /// Turkmenistani Manat (TMT).
    Tmt,
    /// Tunisian Dinar (TND).
    Tnd,
    /// Tongan Pa'anga (TOP).
    Top,
    /// Turkish Lira (TRY).
    Try,
    /// Trinidad and Tobago Dollars (TTD).
    Ttd,
    /// Taiwan Dollars (TWD).
    Twd,
    /// Tanzanian Shilling (TZS).
    Tzs,
    /// Ukrainian Hryvnia (UAH).
    Uah,
    /// Ugandan Shilling (UGX).
    Ugx,
    /// United States Dollars (USD).
    Usd,
    /// United States Dollars Coin (USDC).
    Usdc,
    /// Uruguayan Pesos (UYU).
    Uyu,
    /// Uzbekistan som (UZS).
    Uzs,
    /// Venezuelan Bolivares Digitales (VED).
    Ved,
    /// Venezuelan Bolivares. Deprecated: use `VES` instead (VEF).
    Vef,
    /// Venezuelan Bolivares Soberanos (VES).
    Ves,
    /// Vietnamese đồng (VND).
    Vnd,
    /// Vanuatu Vatu (VUV).
    Vuv,
    /// Samoan Tala (WST).
    Wst,
    /// Central African CFA Franc (XAF).
    Xaf,
    /// East Caribbean Dollar (XCD).
    Xcd,
    /// West African CFA franc (XOF).
    Xof,
    /// CFP Franc (XPF).
    Xpf,
    /// Unrecognized currency (XXX).
    Xxx,
    /// Yemeni Rial (YER).
    Yer,
    /// South African Rand (ZAR).
    Zar,
    /// Zambian Kwacha (ZMW).
    Zmw,
}

impl_schema_enum!(CurrencyCode);

impl CurrencyCode {
    /// Number of minor units (decimal places) conventionally shown for the
    /// currency.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Bif
            | Self::Clp
            | Self::Djf
            | Self::Gnf
            | Self::Isk
            | Self::Jpy
            | Self::Kmf
            | Self::Krw
            | Self::Pyg
            | Self::Rwf
            | Self::Ugx
            | Self::Vnd
            | Self::Vuv
            | Self::Xaf
            | Self::Xof
            | Self::Xpf
            | Self::Xxx => 0,
            Self::Bhd
            | Self::Iqd
            | Self::Jod
            | Self::Kwd
            | Self::Lyd
            | Self::Omr
            | Self::Tnd => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(CurrencyCode::Usd.to_string(), "USD");
        assert_eq!(CurrencyCode::Usdc.to_string(), "USDC");
        assert_eq!("CAD".parse::<CurrencyCode>().unwrap(), CurrencyCode::Cad);
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(CurrencyCode::Usd.minor_units(), 2);
        assert_eq!(CurrencyCode::Jpy.minor_units(), 0);
        assert_eq!(CurrencyCode::Kwd.minor_units(), 3);
    }
}
