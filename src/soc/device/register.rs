//! Register map of the XOR test block. Both registers are 32 bits wide,
//! word aligned and read/write.

/// Only legal access width in bytes.
pub const WORD_SIZE: usize = 4;

/// Size of the MMIO window in bytes.
pub const REGION_SIZE: usize = REGISTERS.len() * WORD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub reset: u32,
}

pub const XDATA: RegisterInfo = RegisterInfo {
    name: "XDATA",
    offset: 0x0,
    width: WORD_SIZE,
    reset: 0x0000_0000,
};

pub const MATCHER: RegisterInfo = RegisterInfo {
    name: "MATCHER",
    offset: 0x4,
    width: WORD_SIZE,
    reset: 0xFFFF_FFFF,
};

pub const REGISTERS: [RegisterInfo; 2] = [XDATA, MATCHER];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    XData,
    Matcher,
}

impl Register {
    /// Resolve a byte offset. Offsets inside a register but not at its start
    /// are not decoded.
    pub fn at(offset: usize) -> Option<Self> {
        match offset {
            o if o == XDATA.offset => Some(Register::XData),
            o if o == MATCHER.offset => Some(Register::Matcher),
            _ => None,
        }
    }

    pub fn info(self) -> &'static RegisterInfo {
        match self {
            Register::XData => &XDATA,
            Register::Matcher => &MATCHER,
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}
