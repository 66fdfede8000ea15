#[path = "device.rs"]
mod device_trait;
pub mod endianness;
pub mod error;
pub mod irq;
pub mod register;

pub use device_trait::Device;
pub use endianness::Endianness;
pub use error::{AccessError, AccessResult};
pub use irq::{IrqLevel, IrqLine, LevelIrq, RecordingIrq};
pub use register::{REGION_SIZE, Register, RegisterInfo, WORD_SIZE};
pub use xor_test::{XorTest, XorTestConfig};
