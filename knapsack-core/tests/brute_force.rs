use knapsack_core::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Best (value, weight) over every feasible subset: highest value, then lowest weight.
fn brute_force(items: &[Item], capacity: i32) -> (i64, i64) {
    let mut best = (0i64, 0i64);
    for mask in 0u32..(1 << items.len()) {
        let (weight, value) = items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .fold((0i64, 0i64), |(w, v), (_, item)| {
                (w + item.weight as i64, v + item.value as i64)
            });
        if weight <= capacity as i64 && (value > best.0 || (value == best.0 && weight < best.1)) {
            best = (value, weight);
        }
    }
    best
}

fn random_instance(rng: &mut SmallRng, min_weight: i32) -> Instance {
    let count = rng.gen_range(1..=12);
    let items = (0..count)
        .map(|_| Item::new(rng.gen_range(min_weight..=8), rng.gen_range(-5..=20)))
        .collect();
    Instance::new(rng.gen_range(0..=30), items)
}

fn check(instance: &Instance, solution: &Solution, expected: (i64, i64)) {
    instance.verify_solution(solution).unwrap();
    assert!(solution
        .selected_indices
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
    let (weight, value) = instance.evaluate(&solution.selected_indices).unwrap();
    assert_eq!(value, expected.0, "instance {:?}", instance);
    assert!(weight <= instance.capacity as i64);
    assert_eq!(weight, expected.1, "instance {:?}", instance);
}

#[test]
fn test_matches_brute_force() {
    let mut rng = SmallRng::seed_from_u64(12345);
    let solver = Solver::default();
    for _ in 0..300 {
        let instance = random_instance(&mut rng, 1);
        let solution = instance.solve(&solver).unwrap();
        check(
            &instance,
            &solution,
            brute_force(&instance.items, instance.capacity),
        );
    }
}

#[test]
fn test_matches_brute_force_with_zero_weights() {
    let mut rng = SmallRng::seed_from_u64(67890);
    let solver = Solver::new(SolverConfig {
        weight_policy: WeightPolicy::NonNegative,
        ..SolverConfig::default()
    })
    .unwrap();
    for _ in 0..300 {
        let instance = random_instance(&mut rng, 0);
        let solution = instance.solve(&solver).unwrap();
        check(
            &instance,
            &solution,
            brute_force(&instance.items, instance.capacity),
        );
    }
}

#[test]
fn test_simple_mode_value_is_exact() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let solver = Solver::new(SolverConfig {
        tie_break: TieBreak::None,
        ..SolverConfig::default()
    })
    .unwrap();
    for _ in 0..300 {
        let instance = random_instance(&mut rng, 1);
        let solution = instance.solve(&solver).unwrap();
        instance.verify_solution(&solution).unwrap();
        let (value, _) = brute_force(&instance.items, instance.capacity);
        assert_eq!(solution.optimal_value as i64, value, "instance {:?}", instance);
    }
}

#[test]
fn test_deterministic_across_solvers() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let instance = random_instance(&mut rng, 1);
        let first = instance.solve(&Solver::default()).unwrap();
        let second = instance.solve(&Solver::default()).unwrap();
        assert_eq!(first, second);
    }
}
