use serde::Serialize;

// ==================== 国定義 ====================

/// 国別シグナルに使う国の定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// FRED 系列IDの国別サフィックス（対応が無い国は None）
    pub fred_suffix: Option<&'static str>,
    pub is_default: bool,
}

const fn country(code: &'static str, name: &'static str, flag: &'static str) -> Country {
    Country {
        code,
        name,
        flag,
        fred_suffix: None,
        is_default: false,
    }
}

const fn fred_country(
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    suffix: &'static str,
) -> Country {
    Country {
        code,
        name,
        flag,
        fred_suffix: Some(suffix),
        is_default: false,
    }
}

pub static COUNTRIES: &[Country] = &[
    // North America
    Country {
        code: "US",
        name: "United States",
        flag: "🇺🇸",
        fred_suffix: Some(""),
        is_default: true,
    },
    fred_country("CA", "Canada", "🇨🇦", "CAN"),
    fred_country("MX", "Mexico", "🇲🇽", "MEX"),
    fred_country("PR", "Puerto Rico", "🇵🇷", "PRI"),
    country("CU", "Cuba", "🇨🇺"),
    country("DO", "Dominican Republic", "🇩🇴"),
    country("PA", "Panama", "🇵🇦"),
    country("CR", "Costa Rica", "🇨🇷"),
    // Europe
    fred_country("GB", "United Kingdom", "🇬🇧", "GBR"),
    fred_country("DE", "Germany", "🇩🇪", "DEU"),
    fred_country("FR", "France", "🇫🇷", "FRA"),
    fred_country("IT", "Italy", "🇮🇹", "ITA"),
    fred_country("ES", "Spain", "🇪🇸", "ESP"),
    fred_country("NL", "Netherlands", "🇳🇱", "NLD"),
    fred_country("BE", "Belgium", "🇧🇪", "BEL"),
    fred_country("AT", "Austria", "🇦🇹", "AUT"),
    fred_country("CH", "Switzerland", "🇨🇭", "CHE"),
    fred_country("SE", "Sweden", "🇸🇪", "SWE"),
    fred_country("NO", "Norway", "🇳🇴", "NOR"),
    fred_country("DK", "Denmark", "🇩🇰", "DNK"),
    fred_country("FI", "Finland", "🇫🇮", "FIN"),
    fred_country("PL", "Poland", "🇵🇱", "POL"),
    fred_country("PT", "Portugal", "🇵🇹", "PRT"),
    fred_country("GR", "Greece", "🇬🇷", "GRC"),
    fred_country("IE", "Ireland", "🇮🇪", "IRL"),
    fred_country("CZ", "Czech Republic", "🇨🇿", "CZE"),
    fred_country("HU", "Hungary", "🇭🇺", "HUN"),
    country("RO", "Romania", "🇷🇴"),
    country("BG", "Bulgaria", "🇧🇬"),
    country("HR", "Croatia", "🇭🇷"),
    country("SK", "Slovakia", "🇸🇰"),
    country("EE", "Estonia", "🇪🇪"),
    country("LV", "Latvia", "🇱🇻"),
    country("LT", "Lithuania", "🇱🇹"),
    country("SI", "Slovenia", "🇸🇮"),
    country("LU", "Luxembourg", "🇱🇺"),
    country("IS", "Iceland", "🇮🇸"),
    country("MT", "Malta", "🇲🇹"),
    country("CY", "Cyprus", "🇨🇾"),
    // Asia Pacific
    fred_country("JP", "Japan", "🇯🇵", "JPN"),
    fred_country("CN", "China", "🇨🇳", "CHN"),
    fred_country("IN", "India", "🇮🇳", "IND"),
    fred_country("KR", "South Korea", "🇰🇷", "KOR"),
    fred_country("AU", "Australia", "🇦🇺", "AUS"),
    fred_country("NZ", "New Zealand", "🇳🇿", "NZL"),
    fred_country("SG", "Singapore", "🇸🇬", "SGP"),
    fred_country("HK", "Hong Kong", "🇭🇰", "HKG"),
    country("TW", "Taiwan", "🇹🇼"),
    fred_country("ID", "Indonesia", "🇮🇩", "IDN"),
    fred_country("MY", "Malaysia", "🇲🇾", "MYS"),
    fred_country("TH", "Thailand", "🇹🇭", "THA"),
    country("PH", "Philippines", "🇵🇭"),
    country("VN", "Vietnam", "🇻🇳"),
    country("PK", "Pakistan", "🇵🇰"),
    country("BD", "Bangladesh", "🇧🇩"),
    country("LK", "Sri Lanka", "🇱🇰"),
    country("MM", "Myanmar", "🇲🇲"),
    country("KH", "Cambodia", "🇰🇭"),
    country("MN", "Mongolia", "🇲🇳"),
    // Middle East & Central Asia
    fred_country("AE", "UAE", "🇦🇪", "ARE"),
    fred_country("SA", "Saudi Arabia", "🇸🇦", "SAU"),
    fred_country("IL", "Israel", "🇮🇱", "ISR"),
    fred_country("TR", "Turkey", "🇹🇷", "TUR"),
    country("QA", "Qatar", "🇶🇦"),
    country("KW", "Kuwait", "🇰🇼"),
    country("OM", "Oman", "🇴🇲"),
    country("JO", "Jordan", "🇯🇴"),
    country("LB", "Lebanon", "🇱🇧"),
    country("KZ", "Kazakhstan", "🇰🇿"),
    country("UZ", "Uzbekistan", "🇺🇿"),
    // South & Central America
    fred_country("BR", "Brazil", "🇧🇷", "BRA"),
    fred_country("AR", "Argentina", "🇦🇷", "ARG"),
    fred_country("CL", "Chile", "🇨🇱", "CHL"),
    fred_country("CO", "Colombia", "🇨🇴", "COL"),
    country("PE", "Peru", "🇵🇪"),
    country("UY", "Uruguay", "🇺🇾"),
    country("VE", "Venezuela", "🇻🇪"),
    country("EC", "Ecuador", "🇪🇨"),
    country("PY", "Paraguay", "🇵🇾"),
    country("BO", "Bolivia", "🇧🇴"),
    // Africa
    fred_country("ZA", "South Africa", "🇿🇦", "ZAF"),
    fred_country("NG", "Nigeria", "🇳🇬", "NGA"),
    country("EG", "Egypt", "🇪🇬"),
    country("KE", "Kenya", "🇰🇪"),
    country("MA", "Morocco", "🇲🇦"),
    country("GH", "Ghana", "🇬🇭"),
    country("ET", "Ethiopia", "🇪🇹"),
    country("TZ", "Tanzania", "🇹🇿"),
    country("DZ", "Algeria", "🇩🇿"),
    country("TN", "Tunisia", "🇹🇳"),
    // Eurasia
    fred_country("RU", "Russia", "🇷🇺", "RUS"),
    country("UA", "Ukraine", "🇺🇦"),
    country("GE", "Georgia", "🇬🇪"),
    country("AZ", "Azerbaijan", "🇦🇿"),
    country("AM", "Armenia", "🇦🇲"),
    country("RS", "Serbia", "🇷🇸"),
    country("ME", "Montenegro", "🇲🇪"),
    country("AL", "Albania", "🇦🇱"),
    country("MK", "North Macedonia", "🇲🇰"),
    country("BA", "Bosnia & Herzegovina", "🇧🇦"),
    // More Africa
    country("SN", "Senegal", "🇸🇳"),
    country("CI", "Cote d'Ivoire", "🇨🇮"),
    country("CM", "Cameroon", "🇨🇲"),
    country("UG", "Uganda", "🇺🇬"),
    country("RW", "Rwanda", "🇷🇼"),
    country("MU", "Mauritius", "🇲🇺"),
    country("BW", "Botswana", "🇧🇼"),
    country("NA", "Namibia", "🇳🇦"),
    country("AO", "Angola", "🇦🇴"),
    country("ZM", "Zambia", "🇿🇲"),
    country("ZW", "Zimbabwe", "🇿🇼"),
    country("MG", "Madagascar", "🇲🇬"),
    country("SD", "Sudan", "🇸🇩"),
    country("LY", "Libya", "🇱🇾"),
    // More Middle East & Asia
    country("BH", "Bahrain", "🇧🇭"),
    country("IR", "Iran", "🇮🇷"),
    country("IQ", "Iraq", "🇮🇶"),
    country("YE", "Yemen", "🇾🇪"),
    country("SY", "Syria", "🇸🇾"),
    country("AF", "Afghanistan", "🇦🇫"),
    country("NP", "Nepal", "🇳🇵"),
    country("BT", "Bhutan", "🇧🇹"),
    country("MV", "Maldives", "🇲🇻"),
    country("BN", "Brunei", "🇧🇳"),
    country("LA", "Laos", "🇱🇦"),
    // More Americas & Caribbean
    country("JM", "Jamaica", "🇯🇲"),
    country("TT", "Trinidad & Tobago", "🇹🇹"),
    country("BS", "Bahamas", "🇧🇸"),
    country("BB", "Barbados", "🇧🇧"),
    country("GT", "Guatemala", "🇬🇹"),
    country("SV", "El Salvador", "🇸🇻"),
    country("HN", "Honduras", "🇭🇳"),
    country("NI", "Nicaragua", "🇳🇮"),
    country("BZ", "Belize", "🇧🇿"),
    country("HT", "Haiti", "🇭🇹"),
    country("GY", "Guyana", "🇬🇾"),
    country("SR", "Suriname", "🇸🇷"),
    // Oceania
    country("FJ", "Fiji", "🇫🇯"),
    country("PG", "Papua New Guinea", "🇵🇬"),
    country("VU", "Vanuatu", "🇻🇺"),
    country("WS", "Samoa", "🇼🇸"),
    country("TO", "Tonga", "🇹🇴"),
];

/// 国選択に対応しているシグナル
pub static COUNTRY_ENABLED_SIGNALS: &[&str] = &[
    "gdp-growth",
    "inflation-cpi",
    "unemployment",
    "consumer-sentiment",
];

// ==================== FRED 系列マッピング ====================

static GDP_GROWTH_SERIES: &[(&str, &str)] = &[
    ("US", "GDP"),
    ("CA", "NGDPRSAXDCCAQ"),
    ("GB", "CLVMNACSCAB1GQUK"),
    ("DE", "CLVMNACSCAB1GQDE"),
    ("FR", "CLVMNACSCAB1GQFR"),
    ("JP", "JPNRGDPEXP"),
    ("CN", "MKTGDPCNA646NWDB"),
    ("IN", "MKTGDPINA646NWDB"),
    ("AU", "AUSGDPNQDSMEI"),
    ("BR", "BRAGDPRQPSMEI"),
    ("MX", "MEXGDPNQDSMEI"),
    ("KR", "KORGDPNQDSMEI"),
    ("IT", "ITANRGDPQDSNAQ"),
    ("ES", "ESPNRGDPQDSNAQ"),
    ("NL", "NLDNRGDPQDSNAQ"),
    ("CH", "CHLNRGDPQDSNAQ"),
    ("SE", "SWENRGDPQDSNAQ"),
    ("PL", "POLNRGDPQDSNAQ"),
    ("TR", "TURNRGDPQDSNAQ"),
    ("ZA", "ZAFNRGDPQDSNAQ"),
    ("SA", "SAUNRGDPQDSNAQ"),
    ("IL", "ISRNRGDPQDSNAQ"),
];

static INFLATION_CPI_SERIES: &[(&str, &str)] = &[
    ("US", "CPIAUCSL"),
    ("CA", "CPALCY01CAM661N"),
    ("GB", "CPALCY01GBM659N"),
    ("DE", "CPALCY01DEM659N"),
    ("FR", "CPALCY01FRM659N"),
    ("JP", "CPALCY01JPM659N"),
    ("CN", "CHNCPIALLMINMEI"),
    ("IN", "INDCPIALLMINMEI"),
    ("AU", "AUSCPIALLQINMEI"),
    ("BR", "BRACPIALLMINMEI"),
    ("MX", "MEXCPIALLMINMEI"),
    ("KR", "KORCPIALLMINMEI"),
    ("IT", "ITACPIALLMINMEI"),
    ("ES", "ESPCPIALLMINMEI"),
    ("NL", "NLDCPIALLMINMEI"),
    ("CH", "CHECPIALLMINMEI"),
    ("SE", "SWECPIALLMINMEI"),
    ("PL", "POLCPIALLMINMEI"),
    ("TR", "TURCPIALLMINMEI"),
    ("ZA", "ZAFCPIALLMINMEI"),
    ("RU", "RUSCPIALLMINMEI"),
    ("SA", "SAUCPIALLMINMEI"),
    ("AE", "ARECPIALLMINMEI"),
    ("SG", "SGPCPIALLMINMEI"),
    ("HK", "HKGCPIALLMINMEI"),
];

static UNEMPLOYMENT_SERIES: &[(&str, &str)] = &[
    ("US", "UNRATE"),
    ("CA", "LRUNTTTTCAM156S"),
    ("GB", "LRUNTTTTGBM156S"),
    ("DE", "LRUNTTTTDEM156S"),
    ("FR", "LRUNTTTTFRM156S"),
    ("JP", "LRUNTTTTJPM156S"),
    ("AU", "LRUNTTTTAUM156S"),
    ("BR", "LRUNTTTTBRM156S"),
    ("MX", "LRUNTTTTMXM156S"),
    ("KR", "LRUNTTTTKRM156S"),
    ("IT", "LRUNTTTTITM156S"),
    ("ES", "LRUNTTTTESM156S"),
    ("NL", "LRUNTTTTNLM156S"),
    ("CH", "LRUNTTTTCHM156S"),
    ("SE", "LRUNTTTTSEM156S"),
    ("PL", "LRUNTTTTPLM156S"),
    ("TR", "LRUNTTTTTRM156S"),
    ("ZA", "LRUNTTTTZAM156S"),
    ("RU", "LRUNTTTTRUM156S"),
    ("IN", "LRUNTTTTINQ156S"),
    ("CN", "LRUNTTTTCNQ156S"),
];

static CONSUMER_SENTIMENT_SERIES: &[(&str, &str)] = &[
    ("US", "UMCSENT"),
    ("GB", "GBRCCIS"),
    ("DE", "DEUCCIS"),
    ("FR", "FRACCIS"),
    ("JP", "JPNCCIS"),
    ("AU", "AUSCCIS"),
];

/// シグナルと国の組み合わせに対応する FRED 系列ID
pub fn fred_series_for_country(signal_id: &str, country_code: &str) -> Option<&'static str> {
    let table = match signal_id {
        "gdp-growth" => GDP_GROWTH_SERIES,
        "inflation-cpi" => INFLATION_CPI_SERIES,
        "unemployment" => UNEMPLOYMENT_SERIES,
        "consumer-sentiment" => CONSUMER_SENTIMENT_SERIES,
        _ => return None,
    };
    table
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, series)| *series)
}

/// シグナルで選択できる国の一覧
///
/// 対応シグナルなら全ての国を返す。FRED 系列の無い国はモック系列で補う
pub fn countries_for_signal(signal_id: &str) -> &'static [Country] {
    if COUNTRY_ENABLED_SIGNALS.contains(&signal_id) {
        COUNTRIES
    } else {
        &[]
    }
}

#[allow(dead_code)]
pub fn default_country() -> &'static Country {
    COUNTRIES
        .iter()
        .find(|c| c.is_default)
        .unwrap_or(&COUNTRIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_country_is_us() {
        assert_eq!(default_country().code, "US");
    }

    #[test]
    fn test_country_codes_are_unique() {
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_fred_series_lookup() {
        assert_eq!(fred_series_for_country("gdp-growth", "US"), Some("GDP"));
        assert_eq!(
            fred_series_for_country("unemployment", "JP"),
            Some("LRUNTTTTJPM156S")
        );
        // マッピングの無い国
        assert_eq!(fred_series_for_country("gdp-growth", "FJ"), None);
        // 国別対応していないシグナル
        assert_eq!(fred_series_for_country("co2-level", "US"), None);
    }

    #[test]
    fn test_countries_for_signal() {
        assert_eq!(
            countries_for_signal("inflation-cpi").len(),
            COUNTRIES.len()
        );
        assert!(countries_for_signal("temp-anomaly").is_empty());
    }

    #[test]
    fn test_series_tables_reference_known_countries() {
        let tables = [
            GDP_GROWTH_SERIES,
            INFLATION_CPI_SERIES,
            UNEMPLOYMENT_SERIES,
            CONSUMER_SENTIMENT_SERIES,
        ];
        for table in tables {
            for (code, _) in table {
                assert!(
                    COUNTRIES.iter().any(|c| c.code == *code),
                    "unknown country code in series table: {code}"
                );
            }
        }
    }
}
