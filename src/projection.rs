//! 11년(0~10년차) 보유비용 예측 엔진.

use serde::Serialize;
use tracing::debug;

use crate::cost;
use crate::input::InputRecord;

/// 예측 마지막 연차. 0년차부터 포함하므로 행은 `PROJECTION_HORIZON + 1`개다.
pub const PROJECTION_HORIZON: u32 = 10;

/// 한 해의 예측 결과. 명목값과 현재가치를 모두 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub market_value: f64,
    pub discounted_market_value: f64,
    pub fuel_cost: f64,
    pub discounted_fuel_cost: f64,
    pub maintenance_cost: f64,
    pub discounted_maintenance_cost: f64,
    pub opportunity_cost: f64,
    pub discounted_opportunity_cost: f64,
    /// 세 비용 항목의 현재가치 합
    pub total_discounted_cost: f64,
    /// 0년차부터 이 해까지의 현재가치 누계
    pub cumulative_discounted_cost: f64,
}

impl ProjectionRow {
    /// 세 비용 항목의 명목 합.
    pub fn total_nominal_cost(&self) -> f64 {
        self.fuel_cost + self.maintenance_cost + self.opportunity_cost
    }
}

/// 연차 순으로 정렬된 예측표. 생성 후 변경할 수 없다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectionTable {
    rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn row(&self, year: u32) -> Option<&ProjectionRow> {
        self.rows.get(usize::try_from(year).ok()?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionRow> {
        self.rows.iter()
    }

    /// 전체 기간의 현재가치 누계(마지막 행의 누계).
    pub fn total_discounted_cost(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.cumulative_discounted_cost)
            .unwrap_or(0.0)
    }

    /// 전체 기간의 명목 비용 합.
    pub fn total_nominal_cost(&self) -> f64 {
        self.rows.iter().map(ProjectionRow::total_nominal_cost).sum()
    }
}

impl<'a> IntoIterator for &'a ProjectionTable {
    type Item = &'a ProjectionRow;
    type IntoIter = std::slice::Iter<'a, ProjectionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// 입력 한 건으로 0~10년차 비용을 예측한다.
///
/// 상태를 갖지 않는 순수 함수이므로 여러 스레드에서 동시에 호출해도 된다.
/// 입력 검증은 호출자 책임이다.
pub fn project(input: &InputRecord) -> ProjectionTable {
    let rate = input.discount_rate;
    // 주행 조건이 고정이므로 연료비는 한 번만 계산한다.
    let fuel = cost::fuel_cost(
        input.kilometers_driven,
        input.fuel_consumption,
        input.fuel_price,
    );

    let mut rows = Vec::with_capacity(PROJECTION_HORIZON as usize + 1);
    let mut cumulative = 0.0;
    for year in 0..=PROJECTION_HORIZON {
        let market_value = cost::market_value(input.current_market_value, year);
        let maintenance = cost::maintenance_cost(input.current_age, input.initial_price, year);
        let opportunity = cost::opportunity_cost(market_value, rate);

        let discounted_fuel = cost::present_value(fuel, rate, year);
        let discounted_maintenance = cost::present_value(maintenance, rate, year);
        let discounted_opportunity = cost::present_value(opportunity, rate, year);
        let total = discounted_fuel + discounted_maintenance + discounted_opportunity;
        cumulative += total;

        rows.push(ProjectionRow {
            year,
            market_value,
            discounted_market_value: cost::present_value(market_value, rate, year),
            fuel_cost: fuel,
            discounted_fuel_cost: discounted_fuel,
            maintenance_cost: maintenance,
            discounted_maintenance_cost: discounted_maintenance,
            opportunity_cost: opportunity,
            discounted_opportunity_cost: discounted_opportunity,
            total_discounted_cost: total,
            cumulative_discounted_cost: cumulative,
        });
    }

    debug!(
        rows = rows.len(),
        total_discounted_cost = cumulative,
        "cost projection computed"
    );
    ProjectionTable { rows }
}
