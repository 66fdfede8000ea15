//! Interrupt output capability handed to a device by its host. Lines are
//! level driven: the device calls `raise`/`lower` and repeated calls with
//! the same level are harmless.
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IrqLevel {
    Asserted,
    #[default]
    DeAsserted,
}

impl IrqLevel {
    #[inline(always)]
    pub fn is_asserted(self) -> bool {
        matches!(self, IrqLevel::Asserted)
    }
}

impl From<bool> for IrqLevel {
    fn from(asserted: bool) -> Self {
        if asserted {
            IrqLevel::Asserted
        } else {
            IrqLevel::DeAsserted
        }
    }
}

pub trait IrqLine {
    fn raise(&mut self);
    fn lower(&mut self);
}

impl<L: IrqLine + ?Sized> IrqLine for &mut L {
    #[inline(always)]
    fn raise(&mut self) {
        (**self).raise()
    }

    #[inline(always)]
    fn lower(&mut self) {
        (**self).lower()
    }
}

/// Line that only remembers its current level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelIrq {
    level: IrqLevel,
}

impl LevelIrq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> IrqLevel {
        self.level
    }
}

impl IrqLine for LevelIrq {
    fn raise(&mut self) {
        self.level = IrqLevel::Asserted;
    }

    fn lower(&mut self) {
        self.level = IrqLevel::DeAsserted;
    }
}

/// Line that keeps every drive in order, so a host can see pulses that a
/// level snapshot would hide (lower immediately followed by raise).
#[derive(Debug, Clone, Default)]
pub struct RecordingIrq {
    level: IrqLevel,
    events: SmallVec<[IrqLevel; 8]>,
}

impl RecordingIrq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> IrqLevel {
        self.level
    }

    pub fn events(&self) -> &[IrqLevel] {
        &self.events
    }

    /// Drain recorded drives, keeping the current level.
    pub fn take_events(&mut self) -> SmallVec<[IrqLevel; 8]> {
        std::mem::take(&mut self.events)
    }

    fn drive(&mut self, level: IrqLevel) {
        self.level = level;
        self.events.push(level);
    }
}

impl IrqLine for RecordingIrq {
    fn raise(&mut self) {
        self.drive(IrqLevel::Asserted);
    }

    fn lower(&mut self) {
        self.drive(IrqLevel::DeAsserted);
    }
}
