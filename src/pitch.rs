//! Frequency helpers: MIDI note conversion for authoring songs, and the PWM divider/wrap
//! needed to produce a square wave of a given frequency.

/// 2^(k/12) for k in 0..12
const SEMITONE_RATIOS: [f64; 12] = [
    1.0,
    1.059_463_094_359_295_3,
    1.122_462_048_309_373,
    1.189_207_115_002_721,
    1.259_921_049_894_873_2,
    1.334_839_854_170_034_4,
    1.414_213_562_373_095_1,
    1.498_307_076_876_681_5,
    1.587_401_051_968_199_4,
    1.681_792_830_507_429,
    1.781_797_436_280_678_5,
    1.887_748_625_363_386_8,
];

const MIN_AUDIBLE_HZ: f64 = 31.0;
const MAX_AUDIBLE_HZ: f64 = 5000.0;

/// Equal-tempered frequency of a MIDI note, A4 (69) = 440 Hz, truncated to whole Hz.
/// Returns 0 (a rest) when the pitch falls outside what a piezo reproduces.
pub fn midi_to_frequency(note: u8) -> u16 {
    let offset = note as i32 - 69;
    let octave = offset.div_euclid(12);
    let semitone = offset.rem_euclid(12) as usize;

    let mut freq = 440.0 * SEMITONE_RATIOS[semitone];
    if octave >= 0 {
        freq *= (1u32 << octave) as f64;
    } else {
        freq /= (1u32 << -octave) as f64;
    }

    if freq > MIN_AUDIBLE_HZ && freq < MAX_AUDIBLE_HZ {
        freq as u16
    } else {
        0
    }
}

/// Round `duration_ms` to the nearest multiple of `step_ms` (ties to even), never
/// shorter than one step.
pub fn quantize_ms(duration_ms: u32, step_ms: u16) -> u16 {
    let step = step_ms as u32;
    if step == 0 {
        return duration_ms.min(u16::MAX as u32) as u16;
    }
    let mut steps = duration_ms / step;
    let rem = duration_ms % step;
    if rem * 2 > step || (rem * 2 == step && steps % 2 == 1) {
        steps += 1;
    }
    (steps * step).max(step).min(u16::MAX as u32) as u16
}

/// Settings for one PWM slice producing a square wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Integer clock divider.
    pub divider: u8,
    /// Counter wraps after `top + 1` ticks.
    pub top: u16,
    /// Compare level for 50 % duty.
    pub compare: u16,
}

/// Divider and wrap value for `frequency_hz` on a 16-bit PWM counter fed by `sys_clk_hz`.
/// `None` for a rest or for frequencies outside the counter's reach.
pub const fn pwm_timing(sys_clk_hz: u32, frequency_hz: u16) -> Option<PwmTiming> {
    if frequency_hz == 0 {
        return None;
    }
    let ticks = sys_clk_hz / frequency_hz as u32;
    let mut divider = ticks.div_ceil(1 << 16);
    if divider == 0 {
        divider = 1;
    }
    if divider > u8::MAX as u32 {
        return None;
    }
    let period = ticks / divider;
    if period < 2 {
        return None;
    }
    Some(PwmTiming {
        divider: divider as u8,
        top: (period - 1) as u16,
        compare: (period / 2) as u16,
    })
}
