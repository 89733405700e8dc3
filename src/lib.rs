#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod display;
#[cfg(feature = "rp2040")]
pub mod hw;
pub mod icons;
pub mod pitch;
pub mod sequencer;
pub mod sh1107;
pub mod song;
pub mod songs;
pub mod temperature;

pub use sequencer::{Clock, MelodySequencer, PlaybackState, SequencerError, Step, ToneEmitter};
pub use song::{Note, Song, SongCatalog};

use temperature::Tmp36;

pub const SEQUENCER_POLL_MS: u64 = 5; // Main loop period; must stay well below the shortest note (25 ms)
pub const TEMP_SAMPLE_INTERVAL_MS: u64 = 2_000; // Temperature sampling interval
pub const BUTTON_DEBOUNCE_MS: u64 = 50; // Ignore further presses of the song button for this long
pub const DISPLAY_SPI_FREQUENCY: u32 = 2_000_000; // SH1107 SPI clock (Hz)
pub const DEFAULT_SONG: usize = songs::ALARM_INDEX; // Song selected at power-up
pub const TEMPERATURE_SENSOR: Tmp36 = Tmp36::RP2040; // TMP36 wired to ADC0 at 3.3 V
