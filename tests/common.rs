use xortest::soc::device::{RecordingIrq, XorTest, XorTestConfig};

/// Freshly reset device with the creation-time lower already drained.
pub fn fresh_device() -> XorTest<RecordingIrq> {
    let config = XorTestConfig::default().with_name("xor0");
    let mut dev = XorTest::with_config(config, RecordingIrq::new());
    dev.line_mut().take_events();
    dev
}
