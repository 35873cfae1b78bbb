pub mod assembler;
pub mod encoder;

pub mod isa {
    pub mod mips1; // classic MIPS I subset covered by the encoder
}

pub use assembler::{assemble, AssembleError};
pub use encoder::{encode, encode_word, AsmConfig, EncodeError, RegisterPolicy};
