//! Non-blocking melody playback.
//!
//! [`MelodySequencer::poll`] is meant to be called from a cooperative main loop, as
//! often as convenient. Each call does a constant amount of work: it starts the song,
//! advances to the next note once the current one has run its duration, or notices that
//! the song has ended. Timing comes from a free-running millisecond [`Clock`]; tones are
//! handed to a fire-and-forget [`ToneEmitter`].

use crate::song::{Note, Song, SongCatalog};

/// Free-running millisecond counter. Expected to wrap at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Starts a tone and returns immediately. A note with frequency 0 silences the output
/// for its duration.
pub trait ToneEmitter {
    fn play(&mut self, note: Note);
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for &mut T {
    fn play(&mut self, note: Note) {
        (**self).play(note)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// `poll` was asked for a song the catalog does not have.
    UnknownSong { index: usize, count: usize },
}

/// Where playback currently is. Shared by every song in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    /// Nothing sounding; the next poll starts the song from its first note.
    #[default]
    Idle,
    /// `note` has been sounding since `started_at_ms`.
    Sounding { note: usize, started_at_ms: u32 },
}

/// What a single call to [`MelodySequencer::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step<'a> {
    /// The song was (re)started and its first note emitted.
    Started { name: &'a str },
    /// The current note is still sounding. Nothing was emitted.
    Holding,
    /// The note at `index` was emitted.
    Advanced { index: usize },
    /// The last note ran out. Nothing was emitted; the next poll restarts the song.
    Finished,
}

pub struct MelodySequencer<'a, C, T> {
    catalog: SongCatalog<'a>,
    clock: C,
    tone: T,
    state: PlaybackState,
}

impl<'a, C, T> MelodySequencer<'a, C, T>
where
    C: Clock,
    T: ToneEmitter,
{
    pub fn new(catalog: SongCatalog<'a>, clock: C, tone: T) -> Self {
        Self {
            catalog,
            clock,
            tone,
            state: PlaybackState::Idle,
        }
    }

    /// Advance playback of `song_index`.
    ///
    /// The playback position is not tied to a song. Polling a different index without
    /// calling [`reset`](Self::reset) first carries the current note position over to
    /// the new song; if that position is past the new song's end, the new song restarts.
    pub fn poll(&mut self, song_index: usize) -> Result<Step<'a>, SequencerError> {
        let song = self
            .catalog
            .get(song_index)
            .ok_or(SequencerError::UnknownSong {
                index: song_index,
                count: self.catalog.len(),
            })?;
        let now = self.clock.now_ms();

        match self.state {
            PlaybackState::Sounding { note, started_at_ms } if note < song.len() => {
                let elapsed = now.wrapping_sub(started_at_ms);
                if elapsed < song.notes[note].duration_ms as u32 {
                    return Ok(Step::Holding);
                }

                let index = note + 1;
                match song.note(index) {
                    Some(next) => {
                        self.state = PlaybackState::Sounding {
                            note: index,
                            started_at_ms: now,
                        };
                        trace!("note {}: {} Hz for {} ms", index, next.frequency_hz, next.duration_ms);
                        self.tone.play(next);
                        Ok(Step::Advanced { index })
                    }
                    None => {
                        info!("Song is over");
                        self.state = PlaybackState::Idle;
                        Ok(Step::Finished)
                    }
                }
            }
            _ => Ok(self.start(song, now)),
        }
    }

    fn start(&mut self, song: &'a Song<'a>, now: u32) -> Step<'a> {
        info!("Now playing: {}", song.name);
        match song.note(0) {
            Some(first) => {
                self.state = PlaybackState::Sounding {
                    note: 0,
                    started_at_ms: now,
                };
                self.tone.play(first);
                Step::Started { name: song.name }
            }
            None => {
                warn!("{} has no notes", song.name);
                info!("Song is over");
                self.state = PlaybackState::Idle;
                Step::Finished
            }
        }
    }

    /// Force the next poll to start its song from the first note.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn song_name(&self, index: usize) -> Option<&'a str> {
        self.catalog.name(index)
    }
}
