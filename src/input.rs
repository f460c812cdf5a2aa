use serde::{Deserialize, Serialize};

/// 비교 대상 차량의 역할. 저장 파일의 키로도 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleRole {
    /// 현재 보유 차량
    Current,
    /// 교체 예정 차량
    Planned,
}

impl VehicleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleRole::Current => "current",
            VehicleRole::Planned => "planned",
        }
    }
}

impl std::fmt::Display for VehicleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleRole {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(VehicleRole::Current),
            "planned" => Ok(VehicleRole::Planned),
            other => Err(InputError::UnknownRole(other.to_string())),
        }
    }
}

/// 차량 한 대의 재무 입력값.
///
/// 엔진은 값을 검증하지 않으므로 [`InputRecord::validate`] 또는
/// [`InputDraft::into_record`]를 거친 값을 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// 신차 구매가(차령 0 기준)
    pub initial_price: f64,
    /// 예측 시작 시점의 차령 [년]
    pub current_age: u32,
    /// 연간 주행거리
    pub kilometers_driven: f64,
    /// 100 거리단위당 연료 소비량
    pub fuel_consumption: f64,
    /// 예측 시작 시점의 시장가치(재판매가)
    pub current_market_value: f64,
    /// 연료 단가
    pub fuel_price: f64,
    /// 연 할인율(0 이상 1 미만의 소수)
    pub discount_rate: f64,
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 필수 항목 누락
    MissingField(&'static str),
    /// 허용 범위를 벗어난 값
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// 알 수 없는 차량 역할 문자열
    UnknownRole(String),
    /// 저장된 입력이 없는 차량 역할
    MissingRole(VehicleRole),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::MissingField(field) => write!(f, "입력 항목 누락: {field}"),
            InputError::OutOfRange {
                field,
                value,
                reason,
            } => write!(f, "{field} 값이 올바르지 않음: {value} ({reason})"),
            InputError::UnknownRole(role) => {
                write!(f, "알 수 없는 차량 역할: {role} (current/planned 중 선택)")
            }
            InputError::MissingRole(role) => {
                write!(f, "{role} 차량의 저장된 입력이 없음 (input {role} 명령으로 입력)")
            }
        }
    }
}

impl std::error::Error for InputError {}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::OutOfRange {
            field,
            value,
            reason: "유한한 숫자여야 함",
        });
    }
    if value < 0.0 {
        return Err(InputError::OutOfRange {
            field,
            value,
            reason: "음수 불가",
        });
    }
    Ok(())
}

impl InputRecord {
    /// 모든 값이 음수가 아니고 할인율이 [0, 1) 범위인지 확인한다.
    pub fn validate(&self) -> Result<(), InputError> {
        check_non_negative("initial_price", self.initial_price)?;
        check_non_negative("kilometers_driven", self.kilometers_driven)?;
        check_non_negative("fuel_consumption", self.fuel_consumption)?;
        check_non_negative("current_market_value", self.current_market_value)?;
        check_non_negative("fuel_price", self.fuel_price)?;
        check_non_negative("discount_rate", self.discount_rate)?;
        if self.discount_rate >= 1.0 {
            return Err(InputError::OutOfRange {
                field: "discount_rate",
                value: self.discount_rate,
                reason: "1 미만이어야 함",
            });
        }
        Ok(())
    }
}

/// 일부 항목만 채워진 입력. 저장값과 CLI 인자를 합친 뒤 검증해 [`InputRecord`]로 만든다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDraft {
    pub initial_price: Option<f64>,
    pub current_age: Option<u32>,
    pub kilometers_driven: Option<f64>,
    pub fuel_consumption: Option<f64>,
    pub current_market_value: Option<f64>,
    pub fuel_price: Option<f64>,
    pub discount_rate: Option<f64>,
}

impl From<InputRecord> for InputDraft {
    fn from(r: InputRecord) -> Self {
        Self {
            initial_price: Some(r.initial_price),
            current_age: Some(r.current_age),
            kilometers_driven: Some(r.kilometers_driven),
            fuel_consumption: Some(r.fuel_consumption),
            current_market_value: Some(r.current_market_value),
            fuel_price: Some(r.fuel_price),
            discount_rate: Some(r.discount_rate),
        }
    }
}

impl InputDraft {
    /// `overrides`에 값이 있는 항목만 덮어쓴다.
    pub fn merge(self, overrides: InputDraft) -> InputDraft {
        InputDraft {
            initial_price: overrides.initial_price.or(self.initial_price),
            current_age: overrides.current_age.or(self.current_age),
            kilometers_driven: overrides.kilometers_driven.or(self.kilometers_driven),
            fuel_consumption: overrides.fuel_consumption.or(self.fuel_consumption),
            current_market_value: overrides.current_market_value.or(self.current_market_value),
            fuel_price: overrides.fuel_price.or(self.fuel_price),
            discount_rate: overrides.discount_rate.or(self.discount_rate),
        }
    }

    /// 누락 항목이 없고 범위가 맞으면 [`InputRecord`]를 반환한다.
    pub fn into_record(self) -> Result<InputRecord, InputError> {
        let record = InputRecord {
            initial_price: self
                .initial_price
                .ok_or(InputError::MissingField("initial_price"))?,
            current_age: self
                .current_age
                .ok_or(InputError::MissingField("current_age"))?,
            kilometers_driven: self
                .kilometers_driven
                .ok_or(InputError::MissingField("kilometers_driven"))?,
            fuel_consumption: self
                .fuel_consumption
                .ok_or(InputError::MissingField("fuel_consumption"))?,
            current_market_value: self
                .current_market_value
                .ok_or(InputError::MissingField("current_market_value"))?,
            fuel_price: self
                .fuel_price
                .ok_or(InputError::MissingField("fuel_price"))?,
            discount_rate: self
                .discount_rate
                .ok_or(InputError::MissingField("discount_rate"))?,
        };
        record.validate()?;
        Ok(record)
    }
}
