/// 연간 정비비 중 차령에 비례하는 비율(차량가 대비, 1년당).
pub const MAINTENANCE_AGE_RATE: f64 = 0.0015;
/// 차령과 무관한 기본 정비비 비율(차량가 대비).
pub const MAINTENANCE_BASE_RATE: f64 = 0.005;
/// 연간 시장가치 감가율(기하급수 감가).
pub const DEPRECIATION_RATE: f64 = 0.1;

/// 연간 연료비를 계산한다.
///
/// `consumption_per_100`은 100 거리단위당 연료량(예: L/100km)이다.
/// 차령과 무관하게 매년 같은 값을 쓴다.
pub fn fuel_cost(km: f64, consumption_per_100: f64, price_per_unit: f64) -> f64 {
    km * consumption_per_100 / 100.0 * price_per_unit
}

/// 연간 정비비를 계산한다. 차령 `base_age + year_offset`에 대해 선형으로 증가한다.
///
/// 차령 0, 오프셋 0이어도 `initial_price * 0.005`가 남으므로 0이 되지 않는다.
pub fn maintenance_cost(base_age: u32, initial_price: f64, year_offset: u32) -> f64 {
    let age = f64::from(base_age) + f64::from(year_offset);
    initial_price * (MAINTENANCE_AGE_RATE * age + MAINTENANCE_BASE_RATE)
}

/// 차량 시장가치에 묶인 자본의 기회비용.
pub fn opportunity_cost(market_value: f64, discount_rate: f64) -> f64 {
    market_value * discount_rate
}

/// `year`년 뒤 비용을 현재가치로 할인한다.
pub fn present_value(cost: f64, discount_rate: f64, year: u32) -> f64 {
    let year = i32::try_from(year).unwrap_or(i32::MAX);
    cost / (1.0 + discount_rate).powi(year)
}

/// `year`년 뒤 명목 시장가치. 연 10% 기하 감가이며 음수가 되지 않는다.
pub fn market_value(current_market_value: f64, year: u32) -> f64 {
    let year = i32::try_from(year).unwrap_or(i32::MAX);
    (current_market_value * (1.0 - DEPRECIATION_RATE).powi(year)).max(0.0)
}
