use ribbon::{
    Cardinal, CardinalOptions, Interpolation, InterpolationConfig, Path, PathCommand, Straight,
    ValueData,
};

fn flat(points: &[(f64, f64)]) -> (Vec<f64>, Vec<ValueData>) {
    let coords = points.iter().flat_map(|&(x, y)| [x, y]).collect();
    let values = points.iter().map(|&(_, y)| ValueData::new(y)).collect();
    (coords, values)
}

fn cardinal(tension: f64, alpha: f64, fill_holes: bool) -> Cardinal {
    Cardinal::new(CardinalOptions {
        tension,
        alpha,
        fill_holes,
    })
}

fn curves(path: &Path) -> Vec<[f64; 6]> {
    path.elements()
        .iter()
        .filter_map(|e| match e.command {
            PathCommand::Curve {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Some([x1, y1, x2, y2, x, y]),
            _ => None,
        })
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

const SCENARIO: [(f64, f64); 5] = [(1.0, 1.0), (2.0, 2.0), (3.0, 8.0), (4.0, 1.0), (5.0, 7.0)];

#[test]
fn scenario_emits_one_move_and_one_curve_per_edge() {
    let (coords, values) = flat(&SCENARIO);
    let path = cardinal(0.0, 0.5, false).interpolate(&coords, &values);

    assert_eq!(path.len(), 5);
    assert_eq!(path.elements()[0].command, PathCommand::Move { x: 1.0, y: 1.0 });
    assert_eq!(path.count('M'), 1);
    assert_eq!(path.count('C'), 4);

    let cs = curves(&path);
    let ends: Vec<(f64, f64)> = cs.iter().map(|c| (c[4], c[5])).collect();
    assert_eq!(ends, SCENARIO[1..].to_vec());

    // Boundary knots: the first outgoing control point sits on the first point, the last
    // incoming one on the last point.
    assert_eq!((cs[0][0], cs[0][1]), (1.0, 1.0));
    assert_eq!((cs[3][2], cs[3][3]), (5.0, 7.0));

    for c in &cs {
        assert!(c.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn curves_carry_the_data_of_their_end_point() {
    let (coords, values) = flat(&SCENARIO);
    let path = cardinal(0.0, 0.5, false).interpolate(&coords, &values);
    let data: Vec<Option<ValueData>> = path.elements().iter().map(|e| e.data.clone()).collect();
    let expected: Vec<Option<ValueData>> = values.into_iter().map(Some).collect();
    assert_eq!(data, expected);
}

#[test]
fn uniform_alpha_reproduces_catmull_rom_tangents() {
    let (coords, values) = flat(&SCENARIO);
    let cs = curves(&cardinal(0.0, 0.0, false).interpolate(&coords, &values));

    // cp1 = p1 + (p2 - p0) / 6, cp2 = p2 - (p3 - p1) / 6
    assert_close(cs[1][0], 2.0 + 2.0 / 6.0);
    assert_close(cs[1][1], 2.0 + 7.0 / 6.0);
    assert_close(cs[1][2], 3.0 - 2.0 / 6.0);
    assert_close(cs[1][3], 8.0 + 1.0 / 6.0);

    // First step: only the incoming control point is bent.
    assert_close(cs[0][2], 2.0 - 2.0 / 6.0);
    assert_close(cs[0][3], 2.0 - 7.0 / 6.0);
}

#[test]
fn evenly_spaced_points_are_independent_of_alpha() {
    let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
    let (coords, values) = flat(&points);
    let uniform = curves(&cardinal(0.0, 0.0, false).interpolate(&coords, &values));
    for alpha in [0.25, 0.5, 1.0] {
        let other = curves(&cardinal(0.0, alpha, false).interpolate(&coords, &values));
        for (a, b) in uniform.iter().zip(&other) {
            for (x, y) in a.iter().zip(b) {
                assert_close(*x, *y);
            }
        }
    }
    assert_close(uniform[1][0], 1.0 + 2.0 / 6.0);
}

#[test]
fn tension_reduces_the_tangent() {
    let (coords, values) = flat(&SCENARIO);
    let loose = curves(&cardinal(0.0, 0.5, false).interpolate(&coords, &values));
    let tight = curves(&cardinal(0.5, 0.5, false).interpolate(&coords, &values));
    assert_close(tight[1][0] - 2.0, (loose[1][0] - 2.0) / 2.0);
    assert_close(tight[1][3] - 8.0, (loose[1][3] - 8.0) / 2.0);
}

#[test]
fn full_tension_degenerates_to_straight_joins() {
    let (coords, values) = flat(&SCENARIO);
    for alpha in [0.0, 0.5, 1.0] {
        let path = cardinal(1.0, alpha, false).interpolate(&coords, &values);
        let mut prev = SCENARIO[0];
        for c in curves(&path) {
            assert_eq!((c[0], c[1]), prev);
            assert_eq!((c[2], c[3]), (c[4], c[5]));
            prev = (c[4], c[5]);
        }
    }
}

#[test]
fn coincident_points_never_produce_non_finite_coordinates() {
    let points = [(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0)];
    let (coords, values) = flat(&points);
    for alpha in [0.0, 0.5, 1.0] {
        let path = cardinal(0.0, alpha, false).interpolate(&coords, &values);
        assert_eq!(path.count('C'), 4);
        for c in curves(&path) {
            assert!(c.iter().all(|v| v.is_finite()), "non-finite curve: {c:?}");
        }
        assert!(!path.stringify().contains("NaN"));
    }
}

#[test]
fn a_hole_splits_the_curve_into_two_runs() {
    let (coords, mut values) = flat(&SCENARIO);
    values[2] = ValueData::hole();
    let path = cardinal(0.0, 0.5, false).interpolate(&coords, &values);

    // Two 2-point runs fall back to straight joins; the gap is a fresh move.
    let commands: Vec<char> = path.elements().iter().map(|e| e.command.letter()).collect();
    assert_eq!(commands, vec!['M', 'L', 'M', 'L']);
    assert_eq!(path.stringify(), "M1,1L2,2M4,1L5,7");
    assert!(
        curves(&path)
            .iter()
            .all(|c| !(c[4] > 2.0 && c[4] < 4.0)),
        "no curve may span the hole"
    );
}

#[test]
fn runs_are_splined_independently_and_joined() {
    let points = [
        (0.0, 0.0),
        (1.0, 2.0),
        (2.0, 1.0),
        (3.0, 9.0),
        (4.0, 3.0),
        (5.0, 4.0),
        (6.0, 2.0),
    ];
    let (coords, mut values) = flat(&points);
    values[3] = ValueData::hole();

    let strategy = cardinal(0.0, 0.5, false);
    let path = strategy.interpolate(&coords, &values);
    assert_eq!(path.count('M'), 2);
    assert_eq!(path.count('C'), 4);

    let left = strategy.interpolate(&coords[..6], &values[..3]);
    let right = strategy.interpolate(&coords[8..], &values[4..]);
    assert_eq!(path, Path::join([left, right]));
}

#[test]
fn filled_holes_are_bridged() {
    let (coords, mut values) = flat(&SCENARIO);
    values[2] = ValueData::hole();
    let path = cardinal(0.0, 0.5, true).interpolate(&coords, &values);
    assert_eq!(path.count('M'), 1);
    assert_eq!(path.count('C'), 3);
    let ends: Vec<(f64, f64)> = curves(&path).iter().map(|c| (c[4], c[5])).collect();
    assert_eq!(ends, vec![(2.0, 2.0), (4.0, 1.0), (5.0, 7.0)]);
}

#[test]
fn short_runs_use_the_straight_fallback() {
    let strategy = cardinal(0.0, 0.5, false);

    let (coords, values) = flat(&SCENARIO[..1]);
    assert_eq!(strategy.interpolate(&coords, &values).stringify(), "M1,1");

    let (coords, values) = flat(&SCENARIO[..2]);
    let path = strategy.interpolate(&coords, &values);
    assert_eq!(path, Straight::default().interpolate(&coords, &values));
    assert_eq!(path.count('C'), 0);
}

#[test]
fn empty_and_all_hole_input_yield_an_empty_path() {
    let strategy = cardinal(0.0, 0.5, false);
    assert!(strategy.interpolate(&[], &[]).is_empty());
    assert!(
        strategy
            .interpolate(&[0.0, 0.0, 1.0, 1.0], &[ValueData::hole(), ValueData::hole()])
            .is_empty()
    );
}

#[test]
fn straight_restarts_after_holes_unless_filled() {
    let (coords, mut values) = flat(&SCENARIO);
    values[1] = ValueData::hole();
    assert_eq!(
        Straight::default().interpolate(&coords, &values).stringify(),
        "M1,1M3,8L4,1L5,7"
    );

    let filled = InterpolationConfig::from_value(&serde_json::json!({
        "type": "none",
        "fillHoles": true
    }))
    .unwrap()
    .build();
    assert_eq!(
        filled.interpolate(&coords, &values).stringify(),
        "M1,1L3,8L4,1L5,7"
    );
}

#[test]
fn a_configured_strategy_is_reusable_across_threads() {
    let strategy = InterpolationConfig::from_value(&serde_json::json!({
        "type": "cardinal",
        "tension": 0.25,
        "alpha": 2.0
    }))
    .unwrap()
    .build();
    let (coords, values) = flat(&SCENARIO);
    let expected = strategy.interpolate(&coords, &values);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| strategy.interpolate(&coords, &values)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });

    // alpha is clamped to 1 at construction.
    let chordal = cardinal(0.25, 1.0, false).interpolate(&coords, &values);
    assert_eq!(expected, chordal);
}
