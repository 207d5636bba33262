use palc::{compile, CompileError, Format};
use palc_bitstream::{AssembleError, Tt06Pal};
use palc_equations::{DefineError, ExprError, OutputError};

fn set_bits(source: &str) -> Vec<usize> {
    let compilation = compile::<Tt06Pal>(source).unwrap();
    compilation
        .bitstream
        .bits()
        .enumerate()
        .filter_map(|(index, bit)| bit.then_some(index))
        .collect()
}

#[test]
fn single_literal() {
    assert_eq!(set_bits("O0 = I0\n"), [0, 176]);
}

#[test]
fn temporaries_and_xor() {
    let source = "\
# shared temporary
T0 = I0 & ~I1
O0 = T0 | I2
O1 = T0 ^ I3
";
    let compilation = compile::<Tt06Pal>(source).unwrap();

    let dnfs: Vec<&str> = compilation
        .outputs
        .iter()
        .map(|output| output.dnf.as_str())
        .collect();
    assert_eq!(
        dnfs,
        [
            "Or(And(I0, ~I1), I2)",
            "Or(And(I0, ~I1, ~I3), And(~I0, I3), And(I1, I3))",
        ]
    );
    assert_eq!(compilation.bitstream.pool_size(), 5);
    assert_eq!(compilation.bitstream.configured_outputs(), 2);

    assert_eq!(
        set_bits(source),
        [0, 2, 14, 26, 33, 35, 45, 69, 70, 79, 176, 177, 189, 190, 191]
    );
}

#[test]
fn shared_terms_use_one_column() {
    let compilation = compile::<Tt06Pal>("O0 = I0 & I1\nO1 = I1 & I0 | I2\n").unwrap();
    assert_eq!(compilation.bitstream.pool_size(), 2);

    let or_matrix = compilation.bitstream.or_matrix();
    assert!(or_matrix.bit(0, 0));
    assert!(or_matrix.bit(1, 0));
    assert!(or_matrix.bit(1, 1));
    assert!(!or_matrix.bit(0, 1));
}

#[test]
fn constant_outputs() {
    let compilation = compile::<Tt06Pal>("O0 = 1\nO1 = 0\n").unwrap();
    assert_eq!(compilation.outputs[0].dnf, "1");
    assert_eq!(compilation.outputs[1].dnf, "0");
    assert!(compilation.outputs[1].terms.is_empty());

    // The constant one term occupies a column without AND fuses.
    assert_eq!(compilation.bitstream.pool_size(), 1);
    assert_eq!(compilation.bitstream.and_matrix().count_ones(), 0);
    assert_eq!(set_bits("O0 = 1\nO1 = 0\n"), [176]);
}

#[test]
fn formats() {
    let compilation = compile::<Tt06Pal>("O0 = I0\n").unwrap();
    let bitstream = &compilation.bitstream;

    let verilog = Format::Verilog.render(bitstream);
    assert!(verilog.starts_with("231'b10000000000"));
    assert_eq!(verilog.len(), "231'b".len() + 231);

    let hex = Format::Hex.render(bitstream);
    assert_eq!(hex.len(), 58);
    assert!(hex.starts_with("80"));
    // bit 176 is the most significant bit of byte 22
    assert_eq!(&hex[44..46], "80");

    assert!(Format::Arduino
        .render(bitstream)
        .starts_with("const uint8_t bitstream[] PROGMEM = {0x80, 0x00,"));
    assert_eq!(Format::Python.render(bitstream).lines().count(), 5);

    let all = Format::All.render(bitstream);
    assert!(all.contains(&verilog));
    assert!(all.contains("Bitstream for Arduino sketch"));
    assert!(all.contains("Python array:"));
}

#[test]
fn source_errors() {
    match compile::<Tt06Pal>("O0 = I0\nO1 = I0 + I1\nO2\n") {
        Err(CompileError::Source(errors)) => assert_eq!(errors.lines.len(), 2),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn equation_errors() {
    let err = compile::<Tt06Pal>("O0 = T1\n").unwrap_err();
    assert!(matches!(
        &err,
        CompileError::Equation(err)
            if err.error == DefineError::Expr(ExprError::UndefinedName("T1".into()))
    ));

    let err = compile::<Tt06Pal>("O0 = I8\n").unwrap_err();
    assert!(matches!(
        &err,
        CompileError::Equation(err)
            if err.error == DefineError::Expr(ExprError::UnknownInput { index: 8, inputs: 8 })
    ));
}

#[test]
fn output_errors() {
    assert!(matches!(
        compile::<Tt06Pal>("T0 = I0\n"),
        Err(CompileError::Outputs(OutputError::NoOutputs))
    ));
    assert!(matches!(
        compile::<Tt06Pal>("O1 = I0\n"),
        Err(CompileError::Outputs(OutputError::Gap { .. }))
    ));
    assert!(matches!(
        compile::<Tt06Pal>("O0 = I0\nO1 = I0\nO2 = I0\nO3 = I0\nO4 = I0\nO5 = I0\n"),
        Err(CompileError::Outputs(OutputError::OutOfRange { .. }))
    ));
}

#[test]
fn too_many_terms() {
    let err = compile::<Tt06Pal>("O0 = I0 ^ I1 ^ I2 ^ I3 ^ I4\n").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Assemble(AssembleError::CapacityExceeded {
            pool_size: 16,
            capacity: 11
        })
    ));

    // eleven distinct terms still fit
    let source = "O0 = I0 ^ I1 ^ I2 ^ I3\nO1 = I4 & I5 | I6 & I7 | I4 & I6\n";
    let compilation = compile::<Tt06Pal>(source).unwrap();
    assert_eq!(compilation.bitstream.pool_size(), 11);
}
