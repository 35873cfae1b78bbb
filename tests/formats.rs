use mips32_rs::encoder::{encode, AsmConfig, EncodeError};
use mips32_rs::isa::mips1::{self, Format};

fn enc(line: &str) -> Result<String, EncodeError> {
    encode(line, &AsmConfig::default())
}

fn field(out: &str, range: std::ops::Range<usize>) -> u8 {
    u8::from_str_radix(&out[range], 2).unwrap()
}

#[test]
fn r_funct_occupies_trailing_six_bits() {
    for (line, mnemonic) in [
        ("add $t0, $t1, $t2", "add"),
        ("sub $t0, $t1, $t2", "sub"),
        ("and $t0, $t1, $t2", "and"),
        ("or $t0, $t1, $t2", "or"),
        ("slt $t0, $t1, $t2", "slt"),
    ] {
        let out = enc(line).unwrap();
        let desc = mips1::lookup(mnemonic).unwrap();
        assert_eq!(desc.format, Format::R);
        assert_eq!(field(&out, 0..6), 0, "`{line}` opcode");
        assert_eq!(field(&out, 26..32), desc.code, "`{line}` funct");
    }
}

#[test]
fn opcode_field_round_trips_to_table() {
    for (line, mnemonic) in [
        ("lw $t0, 4($sp)", "lw"),
        ("sw $t0, 4($sp)", "sw"),
        ("beq $t0, $t1, 3", "beq"),
        ("j 100", "j"),
    ] {
        let out = enc(line).unwrap();
        assert_eq!(field(&out, 0..6), mips1::lookup(mnemonic).unwrap().code);
    }
}

#[test]
fn missing_operand_list_is_malformed() {
    assert!(matches!(
        enc("add $t0"),
        Err(EncodeError::MalformedLine(_))
    ));
}

#[test]
fn wrong_r_arity_is_malformed() {
    assert!(matches!(
        enc("add $t0, $t1"),
        Err(EncodeError::MalformedLine(_))
    ));
}

#[test]
fn wrong_i_arity_is_malformed() {
    assert!(matches!(
        enc("lw $t0, $t1, 4, 5"),
        Err(EncodeError::MalformedLine(_))
    ));
}

#[test]
fn wrong_j_arity_is_malformed() {
    assert!(matches!(
        enc("j 100, 200"),
        Err(EncodeError::MalformedLine(_))
    ));
}

#[test]
fn unknown_mnemonic_is_reported() {
    assert_eq!(
        enc("bogus $t0, $t1").unwrap_err(),
        EncodeError::UnknownMnemonic("bogus".into())
    );
}

#[test]
fn negative_branch_offset_wraps_twos_complement() {
    let out = enc("beq $t0, $t1, -4").unwrap();
    assert_eq!(&out[16..32], "1111111111111100");
}

#[test]
fn immediate_out_of_range() {
    assert_eq!(
        enc("lw $t0, 70000($sp)").unwrap_err(),
        EncodeError::InvalidImmediate("70000($sp)".into())
    );
    assert_eq!(
        enc("beq $t0, $t1, -40000").unwrap_err(),
        EncodeError::InvalidImmediate("-40000".into())
    );
}

#[test]
fn non_numeric_immediate() {
    // no label resolution; branch targets must be decimal literals
    assert_eq!(
        enc("beq $t0, $t1, loop").unwrap_err(),
        EncodeError::InvalidImmediate("loop".into())
    );
}

#[test]
fn jump_target_out_of_range() {
    assert!(enc("j 67108863").is_ok());
    assert_eq!(
        enc("j 67108864").unwrap_err(),
        EncodeError::InvalidImmediate("67108864".into())
    );
}
