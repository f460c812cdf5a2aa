//! 현재 차량과 교체 예정 차량의 예측표를 나란히 비교한다.

use serde::Serialize;

use crate::input::InputRecord;
use crate::projection::{project, ProjectionTable};

/// 두 차량을 각각 독립적으로 예측한다. 한쪽 입력이 다른 쪽 결과에 영향을 주지 않는다.
pub fn compare(a: &InputRecord, b: &InputRecord) -> (ProjectionTable, ProjectionTable) {
    (project(a), project(b))
}

/// 연차별 비교 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub current_total_discounted_cost: f64,
    pub planned_total_discounted_cost: f64,
    pub current_cumulative_discounted_cost: f64,
    pub planned_cumulative_discounted_cost: f64,
    /// 교체 예정 누계 - 현재 누계. 음수면 교체 쪽이 저렴하다.
    pub cumulative_difference: f64,
}

/// 두 예측표 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub current: ProjectionTable,
    pub planned: ProjectionTable,
}

impl Comparison {
    pub fn new(current: &InputRecord, planned: &InputRecord) -> Self {
        let (current, planned) = compare(current, planned);
        Self { current, planned }
    }

    /// 연차를 기준으로 두 표를 맞춘 행 목록.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        self.current
            .iter()
            .zip(self.planned.iter())
            .map(|(c, p)| ComparisonRow {
                year: c.year,
                current_total_discounted_cost: c.total_discounted_cost,
                planned_total_discounted_cost: p.total_discounted_cost,
                current_cumulative_discounted_cost: c.cumulative_discounted_cost,
                planned_cumulative_discounted_cost: p.cumulative_discounted_cost,
                cumulative_difference: p.cumulative_discounted_cost
                    - c.cumulative_discounted_cost,
            })
            .collect()
    }

    /// 예측 기간 전체의 누계 차이(교체 예정 - 현재).
    pub fn final_difference(&self) -> f64 {
        self.planned.total_discounted_cost() - self.current.total_discounted_cost()
    }
}
