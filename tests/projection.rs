//! 예측 엔진 회귀 테스트. 참조 입력의 0년차 값과 표 전체의 불변 조건을 확인한다.
use vehicle_cost_projection::{project, InputRecord, PROJECTION_HORIZON};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn reference() -> InputRecord {
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

#[test]
fn reference_first_year() {
    let table = project(&reference());
    let first = table.row(0).expect("year 0");
    assert_eq!(first.year, 0);
    assert_close("fuel", first.fuel_cost, 1_800.0, 1e-9);
    assert_close("maintenance", first.maintenance_cost, 375.0, 1e-9);
    assert_close("opportunity", first.opportunity_cost, 2_000.0, 1e-9);
    // 0년차는 할인하지 않는다.
    assert_eq!(first.discounted_fuel_cost, first.fuel_cost);
    assert_eq!(first.discounted_maintenance_cost, first.maintenance_cost);
    assert_eq!(first.discounted_opportunity_cost, first.opportunity_cost);
    assert_close("total", first.total_discounted_cost, 4_175.0, 1e-9);
    assert_eq!(first.cumulative_discounted_cost, first.total_discounted_cost);
}

#[test]
fn reference_second_year() {
    let table = project(&reference());
    let row = table.row(1).expect("year 1");
    assert_close("market", row.market_value, 18_000.0, 1e-9);
    assert_close("market pv", row.discounted_market_value, 18_000.0 / 1.1, 1e-9);
    assert_close("fuel pv", row.discounted_fuel_cost, 1_800.0 / 1.1, 1e-9);
    // 30000 * (0.0015 * 6 + 0.005) = 420
    assert_close("maintenance", row.maintenance_cost, 420.0, 1e-9);
    assert_close("maintenance pv", row.discounted_maintenance_cost, 420.0 / 1.1, 1e-9);
    // 기회비용은 할인 전 시장가치 기준
    assert_close("opportunity", row.opportunity_cost, 1_800.0, 1e-9);
    assert_close("opportunity pv", row.discounted_opportunity_cost, 1_800.0 / 1.1, 1e-9);
    assert_close(
        "cumulative",
        row.cumulative_discounted_cost,
        4_175.0 + (1_800.0 + 420.0 + 1_800.0) / 1.1,
        1e-9,
    );
}

#[test]
fn eleven_rows_strictly_increasing_years() {
    let table = project(&reference());
    assert_eq!(table.len(), PROJECTION_HORIZON as usize + 1);
    let years: Vec<u32> = table.iter().map(|r| r.year).collect();
    assert_eq!(years, (0..=10).collect::<Vec<_>>());
}

#[test]
fn cumulative_is_running_sum_and_non_decreasing() {
    let inputs = [
        reference(),
        InputRecord {
            discount_rate: 0.0,
            ..reference()
        },
        InputRecord {
            initial_price: 0.0,
            current_age: 0,
            kilometers_driven: 0.0,
            fuel_consumption: 0.0,
            current_market_value: 0.0,
            fuel_price: 0.0,
            discount_rate: 0.0,
        },
        InputRecord {
            discount_rate: 0.99,
            current_age: 40,
            ..reference()
        },
    ];
    for input in inputs {
        let table = project(&input);
        let mut running = 0.0;
        let mut prev = f64::NEG_INFINITY;
        for row in &table {
            assert!(row.total_discounted_cost >= 0.0);
            running += row.total_discounted_cost;
            assert_close("cumulative", row.cumulative_discounted_cost, running, 1e-9);
            assert!(row.cumulative_discounted_cost >= prev);
            prev = row.cumulative_discounted_cost;
        }
    }
}

#[test]
fn zero_rate_leaves_costs_undiscounted() {
    let input = InputRecord {
        discount_rate: 0.0,
        ..reference()
    };
    let table = project(&input);
    for row in &table {
        assert_eq!(row.discounted_fuel_cost, row.fuel_cost);
        assert_eq!(row.discounted_maintenance_cost, row.maintenance_cost);
        assert_eq!(row.opportunity_cost, 0.0);
        assert_eq!(row.discounted_market_value, row.market_value);
    }
    assert_close(
        "nominal",
        table.total_nominal_cost(),
        table.total_discounted_cost(),
        1e-9,
    );
}

#[test]
fn fuel_cost_is_constant_across_years() {
    let table = project(&reference());
    assert!(table.iter().all(|r| r.fuel_cost == 1_800.0));
}

#[test]
fn market_value_never_negative() {
    let table = project(&reference());
    assert!(table.iter().all(|r| r.market_value >= 0.0));
    let last = table.row(10).expect("year 10");
    assert_close("year 10", last.market_value, 20_000.0 * 0.9f64.powi(10), 1e-9);
}

#[test]
fn projection_is_deterministic() {
    let a = project(&reference());
    let b = project(&reference());
    assert_eq!(a, b);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(
            x.cumulative_discounted_cost.to_bits(),
            y.cumulative_discounted_cost.to_bits()
        );
    }
}

#[test]
fn concurrent_projections_match_sequential() {
    let expected = project(&reference());
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| project(&reference())))
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("thread"), expected);
    }
}
