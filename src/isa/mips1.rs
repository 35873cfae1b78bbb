use serde::{Deserialize, Serialize};

/// MIPS I instruction formats covered by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    J,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub format: Format,
    /// Funct value for R mnemonics, opcode for I/J mnemonics.
    pub code: u8,
}

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "add",
        format: Format::R,
        code: 0x20,
    },
    InstrDesc {
        mnemonic: "sub",
        format: Format::R,
        code: 0x22,
    },
    InstrDesc {
        mnemonic: "and",
        format: Format::R,
        code: 0x24,
    },
    InstrDesc {
        mnemonic: "or",
        format: Format::R,
        code: 0x25,
    },
    InstrDesc {
        mnemonic: "slt",
        format: Format::R,
        code: 0x2a,
    },
    InstrDesc {
        mnemonic: "nop",
        format: Format::R,
        code: 0x00,
    },
    InstrDesc {
        mnemonic: "lw",
        format: Format::I,
        code: 0x23,
    },
    InstrDesc {
        mnemonic: "sw",
        format: Format::I,
        code: 0x2b,
    },
    InstrDesc {
        mnemonic: "beq",
        format: Format::I,
        code: 0x04,
    },
    InstrDesc {
        mnemonic: "j",
        format: Format::J,
        code: 0x02,
    },
];

pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

/// Symbolic register names in index order ($0..$31).
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

pub fn register_index(name: &str) -> Option<u8> {
    REG_NAMES.iter().position(|&n| n == name).map(|i| i as u8)
}
