//! Tests for cube primitives and the cube algebra

use super::*;

fn cube(row: &str, arity: usize) -> Cube {
    Cube::parse(row, arity).unwrap()
}

// ===== Construction and primitives =====

#[test]
fn test_parse_basic_row() {
    let c = cube("01-0 1", 4);
    assert_eq!(c.arity(), 4);
    assert_eq!(c.inputs(), &[Bit::Off, Bit::On, Bit::Dc, Bit::Off]);
    assert_eq!(c.output(), Bit::On);
    assert!(!c.is_null());
}

#[test]
fn test_parse_constant_gate_row() {
    let c = cube("1", 0);
    assert_eq!(c.arity(), 0);
    assert_eq!(c.output(), Bit::On);
    assert_eq!(c.minterms().into_iter().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_parse_arity_mismatch() {
    let err = Cube::parse("010 1", 4).unwrap_err();
    assert!(matches!(
        err,
        crate::error::BlifError::RowArityMismatch {
            expected: 4,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn test_parse_invalid_input_character() {
    let err = Cube::parse("0x1 1", 3).unwrap_err();
    assert!(matches!(
        err,
        crate::error::BlifError::InvalidInputCharacter {
            character: 'x',
            position: 1,
            ..
        }
    ));
}

#[test]
fn test_parse_invalid_output_character() {
    let err = Cube::parse("011 -", 3).unwrap_err();
    assert!(matches!(
        err,
        crate::error::BlifError::InvalidOutputCharacter { character: '-', .. }
    ));
}

#[test]
fn test_parse_malformed_row() {
    assert!(matches!(
        Cube::parse("010", 3).unwrap_err(),
        crate::error::BlifError::MalformedRow { .. }
    ));
    assert!(matches!(
        Cube::parse("0 1 1", 1).unwrap_err(),
        crate::error::BlifError::MalformedRow { .. }
    ));
}

#[test]
fn test_null_cube() {
    let n = Cube::null_cube();
    assert!(n.is_null());
    assert!(n.minterms().is_empty());
}

#[test]
#[should_panic(expected = "cost is undefined")]
fn test_null_cube_cost_panics() {
    let _ = Cube::null_cube().cost();
}

#[test]
fn test_covers() {
    let wide = cube("-1- 1", 3);
    let narrow = cube("011 1", 3);
    assert!(wide.covers(&narrow));
    assert!(!narrow.covers(&wide));
    assert!(wide.covers(&wide));
}

#[test]
fn test_covers_ignores_output_bit() {
    let a = cube("-1 1", 2);
    let b = cube("01 0", 2);
    assert!(a.covers(&b));
}

#[test]
#[should_panic(expected = "equal input arity")]
fn test_covers_arity_mismatch_panics() {
    let a = cube("01 1", 2);
    let b = cube("011 1", 3);
    let _ = a.covers(&b);
}

#[test]
fn test_equality_ignores_nothing_but_shape() {
    // Cubes parsed from different rows with identical shape are equal
    let a = cube("0-1 1", 3);
    let b = cube("0-1 1", 3);
    assert_eq!(a, b);
    let c = cube("0-1 0", 3);
    assert_ne!(a, c); // output bit participates
}

#[test]
fn test_ordering_is_lexicographic_on_input_word() {
    // '-' sorts before '0', which sorts before '1'
    let mut cubes = vec![cube("10 1", 2), cube("-1 1", 2), cube("01 1", 2)];
    cubes.sort();
    let words: Vec<String> = cubes.iter().map(|c| c.to_string()).collect();
    assert_eq!(words, vec!["-1 1", "01 1", "10 1"]);
}

#[test]
fn test_display_round_trips() {
    let c = cube("0-11 1", 4);
    assert_eq!(c.to_string(), "0-11 1");
    assert_eq!(Cube::parse(&c.to_string(), 4).unwrap(), c);
}

// ===== Minterm enumeration =====

#[test]
fn test_minterms_fully_specified() {
    let c = cube("101 1", 3);
    assert_eq!(c.minterms().into_iter().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn test_minterms_big_endian_expansion() {
    // S4: 0--01 over five variables yields {1, 5, 9, 13}
    let c = cube("0--01 1", 5);
    assert_eq!(
        c.minterms().into_iter().collect::<Vec<_>>(),
        vec![1, 5, 9, 13]
    );
}

#[test]
fn test_minterm_count_and_cost_boundaries() {
    // |minterms| = 2^#DC and cost + #DC = arity, for a spread of cubes
    for (row, arity) in [
        ("0-11 1", 4),
        ("---- 1", 4),
        ("1010 1", 4),
        ("-1-0- 1", 5),
    ] {
        let c = cube(row, arity);
        let dc = c.inputs().iter().filter(|&&b| b == Bit::Dc).count();
        assert_eq!(c.minterms().len(), 1 << dc);
        assert_eq!(c.cost() + dc, arity);
    }
}

// ===== Star product =====

#[test]
fn test_star_single_disagreement() {
    // S1: 0111 * 0011 = 0-11
    let a = cube("0111 1", 4);
    let b = cube("0011 1", 4);
    assert_eq!(a.star(&b), cube("0-11 1", 4));
}

#[test]
fn test_star_multiple_disagreements_is_null() {
    // S2: 0111 * 1011 has two conflicts
    let a = cube("0111 1", 4);
    let b = cube("1011 1", 4);
    assert!(a.star(&b).is_null());
}

#[test]
fn test_star_with_dont_cares() {
    let a = cube("-10 1", 3);
    let b = cube("11- 1", 3);
    assert_eq!(a.star(&b), cube("110 1", 3));
}

#[test]
fn test_star_commutativity() {
    let pairs = [
        ("0111 1", "0011 1"),
        ("-10- 1", "110- 1"),
        ("0000 1", "1111 1"),
        ("--1- 1", "01-- 1"),
    ];
    for (l, r) in pairs {
        let a = cube(l, 4);
        let b = cube(r, 4);
        assert_eq!(a.star(&b), b.star(&a), "{} * {}", l, r);
    }
}

#[test]
fn test_star_idempotence() {
    for row in ["0111 1", "-1-0 1", "---- 1", "0000 1"] {
        let c = cube(row, 4);
        assert_eq!(c.star(&c), c, "{} * itself", row);
    }
}

#[test]
#[should_panic(expected = "equal input arity")]
fn test_star_arity_mismatch_panics() {
    let a = cube("01 1", 2);
    let b = cube("011 1", 3);
    let _ = a.star(&b);
}

#[test]
#[should_panic(expected = "rejects the null cube")]
fn test_star_null_operand_panics() {
    let a = cube("01 1", 2);
    let _ = a.star(&Cube::null_cube());
}

// ===== Sharp difference =====

#[test]
fn test_sharp_disjoint_returns_lhs() {
    let a = cube("00- 1", 3);
    let b = cube("11- 1", 3);
    assert_eq!(a.sharp(&b), vec![a.clone()]);
}

#[test]
fn test_sharp_covered_returns_null() {
    let a = cube("011 1", 3);
    let b = cube("0-1 1", 3);
    let result = a.sharp(&b);
    assert_eq!(result.len(), 1);
    assert!(result[0].is_null());
}

#[test]
fn test_sharp_multi_result() {
    // S3: -1-0- # 110-1 = {01-0-, -110-, -1-00}
    let a = cube("-1-0- 1", 5);
    let b = cube("110-1 1", 5);
    let result: BTreeSet<Cube> = a.sharp(&b).into_iter().collect();
    let expected: BTreeSet<Cube> = ["01-0- 1", "-110- 1", "-1-00 1"]
        .iter()
        .map(|r| cube(r, 5))
        .collect();
    assert_eq!(result, expected);
}

#[test]
fn test_sharp_exactness() {
    // minterms(a) \ minterms(b) equals the union over the sharp result
    let pairs = [
        ("-1-0- 1", "110-1 1"),
        ("---- 1", "01-- 1"),
        ("0-1- 1", "0-1- 1"),
        ("1--0 1", "-11- 1"),
    ];
    for (l, r) in pairs {
        let arity = l.len() - 2;
        let a = cube(l, arity);
        let b = cube(r, arity);
        let expected: BTreeSet<u64> =
            a.minterms().difference(&b.minterms()).copied().collect();
        let actual: BTreeSet<u64> = a
            .sharp(&b)
            .iter()
            .filter(|c| !c.is_null())
            .flat_map(|c| c.minterms())
            .collect();
        assert_eq!(actual, expected, "{} # {}", l, r);
    }
}

#[test]
fn test_sharp_of_constant_cubes() {
    // Two constant cubes have the same single minterm, so subtraction
    // leaves nothing
    let a = cube("1", 0);
    let b = cube("1", 0);
    let result = a.sharp(&b);
    assert_eq!(result.len(), 1);
    assert!(result[0].is_null());
}
