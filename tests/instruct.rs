use std::f64::consts::{FRAC_1_SQRT_2, PI};

use num_complex::Complex64;

use qft_rs::gate::GateOp;
use qft_rs::instruct::{instruct_controlled_phase, instruct_gate, instruct_single, instruct_swap};

fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-10
}

fn basis(n: usize, k: usize) -> Vec<Complex64> {
    let mut v = vec![Complex64::new(0.0, 0.0); 1 << n];
    v[k] = Complex64::new(1.0, 0.0);
    v
}

#[test]
fn test_hadamard_on_msb() {
    // H on position 0 of |00> gives (|00> + |10>)/√2
    let mut state = basis(2, 0);
    instruct_gate(&mut state, 2, &GateOp::Hadamard { qubit: 0 });
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    assert!(approx_eq(state[0], s));
    assert!(approx_eq(state[2], s));
    assert!(approx_eq(state[1], Complex64::new(0.0, 0.0)));
}

#[test]
fn test_hadamard_twice_is_identity() {
    let h = GateOp::Hadamard { qubit: 1 }.local_matrix();
    let mut state = basis(3, 5);
    instruct_single(&mut state, 3, &h, 1);
    instruct_single(&mut state, 3, &h, 1);
    for (i, amp) in state.iter().enumerate() {
        let expected = if i == 5 { 1.0 } else { 0.0 };
        assert!(approx_eq(*amp, Complex64::new(expected, 0.0)));
    }
}

#[test]
fn test_controlled_phase_is_symmetric() {
    let start: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 1.0)).collect();
    let mut a = start.clone();
    let mut b = start;
    instruct_controlled_phase(&mut a, 3, 0, 2, PI / 3.0);
    instruct_controlled_phase(&mut b, 3, 2, 0, PI / 3.0);
    for i in 0..8 {
        assert!(approx_eq(a[i], b[i]));
    }
}

#[test]
fn test_controlled_phase_touches_only_both_set() {
    let mut state = vec![Complex64::new(1.0, 0.0); 8];
    instruct_controlled_phase(&mut state, 3, 0, 1, PI / 2.0);
    let i = Complex64::new(0.0, 1.0);
    for (idx, amp) in state.iter().enumerate() {
        if idx & 0b110 == 0b110 {
            assert!(approx_eq(*amp, i), "index {}", idx);
        } else {
            assert!(approx_eq(*amp, Complex64::new(1.0, 0.0)), "index {}", idx);
        }
    }
}

#[test]
fn test_swap_reverses_register() {
    // swapping the outer qubits of |100> gives |001>
    let mut state = basis(3, 0b100);
    instruct_swap(&mut state, 3, 0, 2);
    assert!(approx_eq(state[0b001], Complex64::new(1.0, 0.0)));
    assert!(approx_eq(state[0b100], Complex64::new(0.0, 0.0)));
}
