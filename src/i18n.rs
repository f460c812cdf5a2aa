use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const INPUTS_SAVED: &str = "general.inputs_saved";

    pub const COL_YEAR: &str = "column.year";
    pub const COL_MARKET_VALUE: &str = "column.market_value";
    pub const COL_FUEL: &str = "column.fuel";
    pub const COL_MAINTENANCE: &str = "column.maintenance";
    pub const COL_OPPORTUNITY: &str = "column.opportunity";
    pub const COL_TOTAL: &str = "column.total";
    pub const COL_CUMULATIVE: &str = "column.cumulative";
    pub const COL_CURRENT_TOTAL: &str = "column.current_total";
    pub const COL_PLANNED_TOTAL: &str = "column.planned_total";
    pub const COL_CURRENT_CUMULATIVE: &str = "column.current_cumulative";
    pub const COL_PLANNED_CUMULATIVE: &str = "column.planned_cumulative";
    pub const COL_DIFFERENCE: &str = "column.difference";

    pub const SUMMARY_TOTAL_DISCOUNTED: &str = "summary.total_discounted";
    pub const SUMMARY_TOTAL_NOMINAL: &str = "summary.total_nominal";
    pub const SUMMARY_FINAL_DIFFERENCE: &str = "summary.final_difference";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_KEEP_HINT: &str = "input.keep_hint";
    pub const PROMPT_INITIAL_PRICE: &str = "prompt.initial_price";
    pub const PROMPT_CURRENT_AGE: &str = "prompt.current_age";
    pub const PROMPT_KILOMETERS: &str = "prompt.kilometers";
    pub const PROMPT_FUEL_CONSUMPTION: &str = "prompt.fuel_consumption";
    pub const PROMPT_MARKET_VALUE: &str = "prompt.market_value";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";
    pub const PROMPT_DISCOUNT_RATE: &str = "prompt.discount_rate";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)의 문자열로 내장 문자열을 덮어쓴다.
    /// 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어, 그것도 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        builtin.unwrap_or(key)
    }
}

/// CLI 플래그, 설정, 시스템 로케일 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 `a.b` 형태의 플랫 키로 펼친다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        INPUTS_SAVED => "입력값을 저장했습니다:",
        COL_YEAR => "연차",
        COL_MARKET_VALUE => "시장가치",
        COL_FUEL => "연료비(PV)",
        COL_MAINTENANCE => "정비비(PV)",
        COL_OPPORTUNITY => "기회비용(PV)",
        COL_TOTAL => "합계(PV)",
        COL_CUMULATIVE => "누계(PV)",
        COL_CURRENT_TOTAL => "현재 합계",
        COL_PLANNED_TOTAL => "교체 합계",
        COL_CURRENT_CUMULATIVE => "현재 누계",
        COL_PLANNED_CUMULATIVE => "교체 누계",
        COL_DIFFERENCE => "누계 차이",
        SUMMARY_TOTAL_DISCOUNTED => "10년 총비용(현재가치):",
        SUMMARY_TOTAL_NOMINAL => "10년 총비용(명목):",
        SUMMARY_FINAL_DIFFERENCE => "10년 누계 차이(교체 - 현재):",
        INPUT_HEADING => "\n-- 차량 입력 --",
        INPUT_KEEP_HINT => "엔터를 누르면 [ ] 안의 기존 값을 유지합니다.",
        PROMPT_INITIAL_PRICE => "구매가",
        PROMPT_CURRENT_AGE => "현재 차령 [년]",
        PROMPT_KILOMETERS => "연간 주행거리 [km]",
        PROMPT_FUEL_CONSUMPTION => "연비 [L/100km]",
        PROMPT_MARKET_VALUE => "현재 시장가치",
        PROMPT_FUEL_PRICE => "연료 단가 [/L]",
        PROMPT_DISCOUNT_RATE => "할인율 (예: 0.05)",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        INPUTS_SAVED => "Saved inputs to",
        COL_YEAR => "Year",
        COL_MARKET_VALUE => "Market value",
        COL_FUEL => "Fuel (PV)",
        COL_MAINTENANCE => "Maintenance (PV)",
        COL_OPPORTUNITY => "Opportunity (PV)",
        COL_TOTAL => "Total (PV)",
        COL_CUMULATIVE => "Cumulative (PV)",
        COL_CURRENT_TOTAL => "Current total",
        COL_PLANNED_TOTAL => "Planned total",
        COL_CURRENT_CUMULATIVE => "Current cumulative",
        COL_PLANNED_CUMULATIVE => "Planned cumulative",
        COL_DIFFERENCE => "Difference",
        SUMMARY_TOTAL_DISCOUNTED => "10-year total (present value):",
        SUMMARY_TOTAL_NOMINAL => "10-year total (nominal):",
        SUMMARY_FINAL_DIFFERENCE => "10-year difference (planned - current):",
        INPUT_HEADING => "\n-- Vehicle Input --",
        INPUT_KEEP_HINT => "Press Enter to keep the value shown in [ ].",
        PROMPT_INITIAL_PRICE => "Purchase price",
        PROMPT_CURRENT_AGE => "Current age [years]",
        PROMPT_KILOMETERS => "Annual distance [km]",
        PROMPT_FUEL_CONSUMPTION => "Fuel consumption [L/100km]",
        PROMPT_MARKET_VALUE => "Current market value",
        PROMPT_FUEL_PRICE => "Fuel price [/L]",
        PROMPT_DISCOUNT_RATE => "Discount rate (e.g. 0.05)",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
