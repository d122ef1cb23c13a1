// Observed orders need the round-off floor of double precision.
#![cfg(feature = "f64")]

use approx::assert_relative_eq;
use ivp_compare::prelude::*;

mod common;
use common::{Exponential, curved_equation, default_equation};

#[test]
fn higher_order_methods_are_more_accurate() {
    for de in [default_equation(), curved_equation()] {
        for n in [10, 20, 40] {
            let euler = max_error(Method::Euler, &de, 5.0, n).unwrap();
            let heun = max_error(Method::ImprovedEuler, &de, 5.0, n).unwrap();
            let rk = max_error(Method::RungeKutta, &de, 5.0, n).unwrap();
            assert!(rk < heun && heun < euler, "n = {n}: {rk} {heun} {euler}");
        }
    }
}

#[test]
fn observed_orders_follow_method_orders() {
    let de = default_equation();
    let euler = observed_order(Method::Euler, &de, 5.0, 20).unwrap();
    let heun = observed_order(Method::ImprovedEuler, &de, 5.0, 20).unwrap();
    let rk = observed_order(Method::RungeKutta, &de, 5.0, 20).unwrap();

    assert!(euler > 0.9, "euler order {euler}");
    assert!(heun > 1.8, "improved euler order {heun}");
    assert!(rk > 3.5, "runge-kutta order {rk}");
}

#[test]
fn total_errors_trend_downward() {
    let de = curved_equation();
    for method in Method::NUMERICAL {
        let taes = total_approximation_error(method, &de, 5.0, 3, 10).unwrap();
        let (first, last) = (taes[0], taes[taes.len() - 1]);
        assert!(last < first, "{method}: {first} -> {last}");
    }
}

#[test]
fn mock_equation_converges_at_first_order() {
    let eq = Exponential::new(0.5, 1.0);
    let order = observed_order(Method::Euler, &eq, 1.5, 64).unwrap();
    assert_relative_eq!(order, 1.0, max_relative = 0.05);

    let exact = Method::Exact.solve(&eq, 1.5, 4).unwrap();
    assert_relative_eq!(exact.ys()[4], 1.0_f64.exp(), max_relative = 1e-14);
}
