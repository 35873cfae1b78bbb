use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::isa::mips1::{self, Format};

/// How register operand tokens are resolved to indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterPolicy {
    /// Names from the $zero..$ra table only.
    Symbolic,
    /// Bare decimal indices 0..=31 only.
    Numeric,
    /// Try the name table first, then a decimal index.
    Either,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsmConfig {
    pub registers: RegisterPolicy,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            registers: RegisterPolicy::Either,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    #[error("unknown register `{0}`")]
    UnknownRegister(String),
    #[error("malformed line: {0}")]
    MalformedLine(String),
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),
}

/// Trim the ends, drop the trailing `;` comment, and collapse doubled
/// spaces. The collapse is a single non-overlapping pass, so a run of
/// three or more spaces keeps a doubled pair; operand parsing discards
/// spaces anyway, only the mnemonic/operand split relies on this.
pub fn normalize(line: &str) -> String {
    let trimmed = line.trim();
    let code = match trimmed.find(';') {
        Some(p) => &trimmed[..p],
        None => trimmed,
    };
    code.replace("  ", " ")
}

/// Encode one source line to its 32-bit machine word.
pub fn encode_word(line: &str, cfg: &AsmConfig) -> Result<u32, EncodeError> {
    let line = normalize(line);
    debug!(line = %line, "normalized");

    let sp = line
        .find(' ')
        .ok_or_else(|| EncodeError::MalformedLine(format!("`{line}` has no operand list")))?;
    let mnemonic = &line[..sp];
    let operands: Vec<String> = line[sp + 1..]
        .replace(' ', "")
        .split(',')
        .map(str::to_string)
        .collect();
    debug!(mnemonic, ?operands, "split");

    let desc = mips1::lookup(mnemonic)
        .ok_or_else(|| EncodeError::UnknownMnemonic(mnemonic.to_string()))?;
    debug!(format = ?desc.format, code = desc.code, "classified");

    let word = match desc.format {
        Format::R => {
            arity(mnemonic, &operands, 3)?;
            // rd is listed first in source but packed after rs and rt;
            // opcode and shamt fields stay zero.
            let rs = reg(&operands[1], cfg)?;
            let rt = reg(&operands[2], cfg)?;
            let rd = reg(&operands[0], cfg)?;
            (u32::from(rs) << 21)
                | (u32::from(rt) << 16)
                | (u32::from(rd) << 11)
                | u32::from(desc.code)
        }
        Format::I => {
            // Two call conventions: `lw rt, off(base)` carries both the
            // base register and the offset in the second token, while
            // `beq rs, rt, off` uses a separate third token.
            let (base, off) = match operands.len() {
                2 => (&operands[1], &operands[1]),
                3 => (&operands[1], &operands[2]),
                n => {
                    return Err(EncodeError::MalformedLine(format!(
                        "`{mnemonic}` takes 2 or 3 operands, got {n}"
                    )))
                }
            };
            let rs = reg(base, cfg)?;
            let rt = reg(&operands[0], cfg)?;
            let imm = immediate(off)?;
            (u32::from(desc.code) << 26)
                | (u32::from(rs) << 21)
                | (u32::from(rt) << 16)
                | u32::from(imm)
        }
        Format::J => {
            arity(mnemonic, &operands, 1)?;
            (u32::from(desc.code) << 26) | jump_target(&operands[0])?
        }
    };
    debug!(word = %format_args!("{word:032b}"), "encoded");
    Ok(word)
}

/// Encode one source line to its 32-character binary-string form.
pub fn encode(line: &str, cfg: &AsmConfig) -> Result<String, EncodeError> {
    encode_word(line, cfg).map(|w| format!("{w:032b}"))
}

fn arity(mnemonic: &str, operands: &[String], want: usize) -> Result<(), EncodeError> {
    if operands.len() == want {
        Ok(())
    } else {
        Err(EncodeError::MalformedLine(format!(
            "`{mnemonic}` takes {want} operands, got {}",
            operands.len()
        )))
    }
}

/// Resolve a register token to its 5-bit index. A parenthesized segment
/// (memory base, e.g. `4($sp)`) reduces the token to its inner part and a
/// leading `$` sigil is stripped before lookup.
fn reg(token: &str, cfg: &AsmConfig) -> Result<u8, EncodeError> {
    let mut t = token.trim();
    if let Some(open) = t.find('(') {
        let inner = &t[open + 1..];
        let close = inner
            .find(')')
            .ok_or_else(|| EncodeError::UnknownRegister(token.to_string()))?;
        t = &inner[..close];
    }
    if let Some(sigil) = t.find('$') {
        t = &t[sigil + 1..];
    }
    let idx = match cfg.registers {
        RegisterPolicy::Symbolic => mips1::register_index(t),
        RegisterPolicy::Numeric => numeric_register(t),
        RegisterPolicy::Either => mips1::register_index(t).or_else(|| numeric_register(t)),
    }
    .ok_or_else(|| EncodeError::UnknownRegister(token.to_string()))?;
    debug!(token, index = idx, "register");
    Ok(idx)
}

fn numeric_register(t: &str) -> Option<u8> {
    t.parse::<u8>().ok().filter(|&i| i < 32)
}

/// Parse the offset part of an immediate token (the substring before any
/// `(`) as a signed decimal. Negative values wrap two's-complement into
/// the 16-bit field.
fn immediate(token: &str) -> Result<u16, EncodeError> {
    let t = match token.find('(') {
        Some(p) => &token[..p],
        None => token,
    };
    let v = t
        .parse::<i32>()
        .map_err(|_| EncodeError::InvalidImmediate(token.to_string()))?;
    if !(-(1 << 15)..(1 << 16)).contains(&v) {
        return Err(EncodeError::InvalidImmediate(token.to_string()));
    }
    debug!(token, value = v, "immediate");
    Ok(v as u16)
}

fn jump_target(token: &str) -> Result<u32, EncodeError> {
    let v = token
        .parse::<u32>()
        .map_err(|_| EncodeError::InvalidImmediate(token.to_string()))?;
    if v >= 1 << 26 {
        return Err(EncodeError::InvalidImmediate(token.to_string()));
    }
    debug!(token, target = v, "jump target");
    Ok(v)
}
