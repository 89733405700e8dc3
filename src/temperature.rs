/// TMP36 analog temperature sensor: 10 mV/°C with a 500 mV offset at 0 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tmp36 {
    /// ADC reference voltage in millivolts
    pub vref_mv: u16,
    /// ADC resolution in bits
    pub resolution_bits: u8,
}

impl Tmp36 {
    /// 5 V reference, 10-bit converter.
    pub const ARDUINO_UNO: Self = Self::new(5_000, 10);
    /// 3.3 V reference, 12-bit converter.
    pub const RP2040: Self = Self::new(3_300, 12);

    pub const fn new(vref_mv: u16, resolution_bits: u8) -> Self {
        Self { vref_mv, resolution_bits }
    }

    pub fn voltage(&self, raw: u16) -> f32 {
        let full_scale = (1u32 << self.resolution_bits) as f32;
        raw as f32 * (self.vref_mv as f32 / 1000.0) / full_scale
    }

    pub fn celsius(&self, raw: u16) -> f32 {
        (self.voltage(raw) - 0.5) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn uno_reading() {
        // 153 * 5 / 1024 = 0.7471 V
        assert!(close(Tmp36::ARDUINO_UNO.voltage(153), 0.7471));
        assert!(close(Tmp36::ARDUINO_UNO.celsius(153), 24.707));
        assert!(close(Tmp36::ARDUINO_UNO.celsius(0), -50.0));
    }

    #[test]
    fn rp2040_reading() {
        // 0.75 V is 25 °C
        let raw = (0.75 / 3.3 * 4096.0) as u16;
        assert!((Tmp36::RP2040.celsius(raw) - 25.0).abs() < 0.1);
    }

    #[test]
    fn near_zero_and_full_scale() {
        assert!(close(Tmp36::ARDUINO_UNO.celsius(102), -0.195));
        assert!(close(Tmp36::ARDUINO_UNO.celsius(1023), 449.512));
    }
}
