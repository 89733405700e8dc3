//! RP2040 implementations of the sequencer's clock and tone output.

use embassy_futures::select::{select, Either};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};

use crate::pitch::pwm_timing;
use crate::sequencer::{Clock, ToneEmitter};
use crate::song::Note;

pub type ToneRequests = Signal<CriticalSectionRawMutex, Note>;

/// Tone requests from the main loop to the speaker task. Only the newest request is kept.
pub static TONE_REQUESTS: ToneRequests = Signal::new();

/// Uptime in milliseconds, truncated to 32 bits so it wraps like a hardware counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Hands notes to [`PwmSpeaker::run`] without waiting for it.
#[derive(Clone, Copy)]
pub struct SignalTone {
    requests: &'static ToneRequests,
}

impl SignalTone {
    pub const fn new(requests: &'static ToneRequests) -> Self {
        Self { requests }
    }

    pub fn silence(&mut self) {
        self.requests.signal(Note::rest(0));
    }
}

impl ToneEmitter for SignalTone {
    fn play(&mut self, note: Note) {
        self.requests.signal(note);
    }
}

/// Square wave on PWM channel A at 50 % duty.
pub struct PwmSpeaker<'d> {
    pwm: Pwm<'d>,
    sys_clk_hz: u32,
}

impl<'d> PwmSpeaker<'d> {
    pub fn new(pwm: Pwm<'d>, sys_clk_hz: u32) -> Self {
        let mut speaker = Self { pwm, sys_clk_hz };
        speaker.silence();
        speaker
    }

    fn sound(&mut self, note: Note) {
        match pwm_timing(self.sys_clk_hz, note.frequency_hz) {
            Some(timing) => {
                let mut config = PwmConfig::default();
                config.divider = timing.divider.into();
                config.top = timing.top;
                config.compare_a = timing.compare;
                config.enable = true;
                self.pwm.set_config(&config);
            }
            None => {
                if !note.is_rest() {
                    warn!("{} Hz is out of range for the speaker", note.frequency_hz);
                }
                self.silence();
            }
        }
    }

    fn silence(&mut self) {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        config.enable = false;
        self.pwm.set_config(&config);
    }

    /// Play requests forever. A new request cuts the current note short.
    pub async fn run(&mut self, requests: &ToneRequests) {
        let mut note = requests.wait().await;
        loop {
            self.sound(note);
            let duration = Timer::after_millis(note.duration_ms as u64);
            match select(duration, requests.wait()).await {
                Either::First(()) => {
                    self.silence();
                    note = requests.wait().await;
                }
                Either::Second(next) => note = next,
            }
        }
    }
}
