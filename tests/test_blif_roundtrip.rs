//! Integration tests for BLIF parsing and serialization

use blifmin::{BlifError, BlifReadError, BlifReader, BlifWriter, Model};

const ADDER_BIT: &str = "\
.model adder_bit
.inputs a b cin
.outputs sum cout
.names a b cin sum
001 1
010 1
100 1
111 1
.names a b cin cout
11- 1
1-1 1
-11 1
.end
";

#[test]
fn test_parse_basic_model() {
    let model = Model::from_blif_string(ADDER_BIT).unwrap();
    assert_eq!(model.name(), "adder_bit");
    assert_eq!(model.inputs().len(), 3);
    assert_eq!(model.outputs().len(), 2);
    assert_eq!(model.gates().len(), 2);
    assert_eq!(model.gates()[0].output().as_ref(), "sum");
    assert_eq!(model.gates()[0].cover().len(), 4);
    assert_eq!(model.gates()[1].cover().len(), 3);
}

#[test]
fn test_round_trip_preserves_model() {
    let model = Model::from_blif_string(ADDER_BIT).unwrap();
    let text = model.to_blif_string().unwrap();
    let reparsed = Model::from_blif_string(&text).unwrap();
    assert_eq!(model, reparsed);
}

#[test]
fn test_round_trip_with_latches_and_clocks() {
    let text = "\
.model seq
.inputs d clk
.outputs q
.names d q
1 1
.latch d q re clk 0
.clock clk
.end
";
    let model = Model::from_blif_string(text).unwrap();
    assert_eq!(model.latches().len(), 1);
    assert_eq!(
        model.latches()[0],
        vec!["d", "q", "re", "clk", "0"]
    );
    assert_eq!(model.clocks(), [vec!["clk".to_string()]].as_slice());

    let reparsed = Model::from_blif_string(&model.to_blif_string().unwrap()).unwrap();
    assert_eq!(model, reparsed);
}

#[test]
fn test_constant_gate_round_trip() {
    let text = "\
.model consts
.inputs
.outputs one
.names one
1
.end
";
    let model = Model::from_blif_string(text).unwrap();
    let gate = &model.gates()[0];
    assert!(gate.inputs().is_empty());
    assert_eq!(gate.cover().len(), 1);

    let reparsed = Model::from_blif_string(&model.to_blif_string().unwrap()).unwrap();
    assert_eq!(model, reparsed);
}

#[test]
fn test_continuation_lines_join_into_inputs() {
    // A .inputs directive spread over four physical lines
    let text = ".model wide\n.inputs a\\\nb\\\nc d\n.outputs out\n.end\n";
    let model = Model::from_blif_string(text).unwrap();
    let names: Vec<&str> = model.inputs().iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_comments_and_blank_lines_are_invisible() {
    let text = "\
# logic network
.model commented

.inputs a b   # two inputs
.outputs y
.names a b y  # an AND gate
11 1
.end
";
    let model = Model::from_blif_string(text).unwrap();
    assert_eq!(model.inputs().len(), 2);
    assert_eq!(model.gates()[0].cover().len(), 1);
}

#[test]
fn test_unknown_directive_is_rejected() {
    let text = ".model bad\n.wires a b\n.end\n";
    let err = Model::from_blif_string(text).unwrap_err();
    assert!(matches!(
        err,
        BlifReadError::Blif(BlifError::UnknownDirective { .. })
    ));
}

#[test]
fn test_row_outside_gate_is_rejected() {
    let text = ".model bad\n.inputs a b\n11 1\n.end\n";
    let err = Model::from_blif_string(text).unwrap_err();
    assert!(matches!(
        err,
        BlifReadError::Blif(BlifError::RowOutsideGate { .. })
    ));
}

#[test]
fn test_row_arity_mismatch_is_rejected() {
    let text = ".model bad\n.inputs a b c\n.outputs y\n.names a b c y\n11 1\n.end\n";
    let err = Model::from_blif_string(text).unwrap_err();
    assert!(matches!(
        err,
        BlifReadError::Blif(BlifError::RowArityMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_invalid_bit_character_is_rejected() {
    let text = ".model bad\n.inputs a b\n.outputs y\n.names a b y\n1x 1\n.end\n";
    let err = Model::from_blif_string(text).unwrap_err();
    assert!(matches!(
        err,
        BlifReadError::Blif(BlifError::InvalidInputCharacter { character: 'x', .. })
    ));
}

#[test]
fn test_missing_model_is_rejected() {
    let text = ".inputs a\n.outputs y\n.end\n";
    let err = Model::from_blif_string(text).unwrap_err();
    assert!(matches!(err, BlifReadError::Blif(BlifError::MissingModel)));
}

#[test]
fn test_gate_closed_by_end_of_input() {
    // No .end directive: the open .names block still becomes a gate
    let text = ".model open\n.inputs a\n.outputs y\n.names a y\n1 1\n";
    let model = Model::from_blif_string(text).unwrap();
    assert_eq!(model.gates().len(), 1);
}

#[test]
fn test_serialized_line_discipline() {
    let model = Model::from_blif_string(ADDER_BIT).unwrap();
    let text = model.to_blif_string().unwrap();
    assert!(text.starts_with(".model adder_bit\n"));
    assert!(text.contains("\n.inputs a b cin\n"));
    assert!(text.contains("\n.outputs sum cout\n"));
    assert!(text.ends_with(".end\n"));
}
