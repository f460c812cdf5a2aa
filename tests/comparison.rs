//! 두 차량 비교 테스트. 각 표가 독립적으로 계산되는지 확인한다.
use vehicle_cost_projection::{compare, project, Comparison, InputRecord};

fn current() -> InputRecord {
    InputRecord {
        initial_price: 30_000.0,
        current_age: 5,
        kilometers_driven: 15_000.0,
        fuel_consumption: 8.0,
        current_market_value: 20_000.0,
        fuel_price: 1.5,
        discount_rate: 0.10,
    }
}

fn planned() -> InputRecord {
    InputRecord {
        initial_price: 45_000.0,
        current_age: 0,
        kilometers_driven: 15_000.0,
        fuel_consumption: 4.5,
        current_market_value: 45_000.0,
        fuel_price: 1.5,
        discount_rate: 0.10,
    }
}

#[test]
fn compare_matches_independent_projections() {
    let (a, b) = compare(&current(), &planned());
    assert_eq!(a, project(&current()));
    assert_eq!(b, project(&planned()));
    assert_eq!(a.len(), 11);
    assert_eq!(b.len(), 11);
}

#[test]
fn swapping_arguments_swaps_tables() {
    let (a, b) = compare(&current(), &planned());
    let (b2, a2) = compare(&planned(), &current());
    assert_eq!(a, a2);
    assert_eq!(b, b2);
}

#[test]
fn identical_inputs_yield_identical_tables() {
    let (a, b) = compare(&current(), &current());
    assert_eq!(a, b);
}

#[test]
fn aligned_rows_report_difference() {
    let cmp = Comparison::new(&current(), &planned());
    let rows = cmp.rows();
    assert_eq!(rows.len(), 11);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.year as usize, i);
        let c = cmp.current.row(row.year).expect("current row");
        let p = cmp.planned.row(row.year).expect("planned row");
        assert_eq!(row.current_total_discounted_cost, c.total_discounted_cost);
        assert_eq!(row.planned_total_discounted_cost, p.total_discounted_cost);
        assert_eq!(
            row.cumulative_difference,
            p.cumulative_discounted_cost - c.cumulative_discounted_cost
        );
    }
    let last = rows.last().expect("last row");
    assert_eq!(cmp.final_difference(), last.cumulative_difference);
}
