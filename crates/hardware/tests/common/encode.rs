//! Instruction word builders.
//!
//! Each helper packs its operands into the 16-bit layout the decoder expects.
//! Programs are turned into big-endian byte images with [`image`].

use dlw1_core::common::RegisterId;

pub const OP_ADD: u16 = 0b000;
pub const OP_SUB: u16 = 0b001;
pub const OP_LOAD: u16 = 0b010;
pub const OP_STORE: u16 = 0b011;
pub const OP_JUMP: u16 = 0b100;
pub const OP_JUMPZ: u16 = 0b101;
pub const OP_JUMPNZ: u16 = 0b110;
pub const OP_JUMPN: u16 = 0b111;

const fn r(reg: RegisterId) -> u16 {
    reg as u16
}

pub const fn add_reg(src: RegisterId, src2: RegisterId, dest: RegisterId) -> u16 {
    r(dest) << 8 | r(src2) << 6 | r(src) << 4 | OP_ADD << 1
}

pub const fn add_imm(src: RegisterId, imm: u8, dest: RegisterId) -> u16 {
    (imm as u16) << 8 | r(dest) << 6 | r(src) << 4 | OP_ADD << 1 | 1
}

pub const fn sub_reg(src: RegisterId, src2: RegisterId, dest: RegisterId) -> u16 {
    r(dest) << 8 | r(src2) << 6 | r(src) << 4 | OP_SUB << 1
}

pub const fn sub_imm(src: RegisterId, imm: u8, dest: RegisterId) -> u16 {
    (imm as u16) << 8 | r(dest) << 6 | r(src) << 4 | OP_SUB << 1 | 1
}

pub const fn load_imm(addr: u8, dest: RegisterId) -> u16 {
    (addr as u16) << 8 | r(dest) << 6 | OP_LOAD << 1 | 1
}

pub const fn load_reg(src: RegisterId, dest: RegisterId) -> u16 {
    r(dest) << 8 | r(src) << 4 | OP_LOAD << 1
}

/// `base` must not be `A`; a zero base field selects the immediate form.
pub const fn load_rel(base: RegisterId, offset: i8, dest: RegisterId) -> u16 {
    (offset as u8 as u16) << 8 | r(dest) << 6 | r(base) << 4 | OP_LOAD << 1 | 1
}

pub const fn bank(n: u8) -> u16 {
    (n as u16) << 8 | 0b11 << 6 | OP_LOAD << 1
}

pub const fn store_imm(src: RegisterId, addr: u8) -> u16 {
    (addr as u16) << 8 | r(src) << 6 | OP_STORE << 1 | 1
}

/// Stores `src` at the address held in `addr`.
pub const fn store_reg(src: RegisterId, addr: RegisterId) -> u16 {
    r(addr) << 8 | r(src) << 4 | OP_STORE << 1
}

/// `base` must not be `A`.
pub const fn store_rel(val: RegisterId, base: RegisterId, offset: i8) -> u16 {
    (offset as u8 as u16) << 8 | r(val) << 6 | r(base) << 4 | OP_STORE << 1 | 1
}

pub const fn mov(src: RegisterId, dest: RegisterId) -> u16 {
    r(dest) << 8 | 0b11 << 6 | r(src) << 4 | OP_STORE << 1
}

pub const fn jump_imm(op: u16, target: u8) -> u16 {
    (target as u16) << 8 | op << 1 | 1
}

pub const fn jump_reg(op: u16, src: RegisterId) -> u16 {
    r(src) << 4 | op << 1
}

/// Relative to the PC after fetch; `offset` must fit in 9 signed bits.
pub const fn jump_rel(op: u16, offset: i16) -> u16 {
    ((offset as u16) & 0x1FF) << 7 | 0b01 << 4 | op << 1 | 1
}

pub const fn halt() -> u16 {
    0b1111_1111_0000_1000
}

/// Serializes instruction words into a big-endian program image.
pub fn image(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
