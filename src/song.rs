/// One tone of a song. A frequency of 0 is a rest of the given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency_hz: u16,
    pub duration_ms: u16,
}

impl Note {
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self { frequency_hz, duration_ms }
    }

    pub const fn rest(duration_ms: u16) -> Self {
        Self { frequency_hz: 0, duration_ms }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// A named melody, played in slice order.
#[derive(Debug, Clone, Copy)]
pub struct Song<'a> {
    pub name: &'a str,
    pub notes: &'a [Note],
}

impl<'a> Song<'a> {
    pub const fn new(name: &'a str, notes: &'a [Note]) -> Self {
        Self { name, notes }
    }

    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn note(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    /// Length of one pass through the song, rests included.
    pub fn total_duration_ms(&self) -> u32 {
        self.notes.iter().map(|n| n.duration_ms as u32).sum()
    }
}

/// Fixed, ordered set of songs. Songs are only ever referred to by index.
#[derive(Debug, Clone, Copy)]
pub struct SongCatalog<'a> {
    songs: &'a [Song<'a>],
}

impl<'a> SongCatalog<'a> {
    pub const fn new(songs: &'a [Song<'a>]) -> Self {
        Self { songs }
    }

    pub const fn len(&self) -> usize {
        self.songs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Song<'a>> {
        self.songs.get(index)
    }

    pub fn name(&self, index: usize) -> Option<&'a str> {
        self.get(index).map(|song| song.name)
    }

    /// Index of the song after `index`, wrapping back to the first one.
    pub fn next_index(&self, index: usize) -> usize {
        if self.songs.is_empty() {
            0
        } else {
            (index + 1) % self.songs.len()
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Song<'a>> {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEEPS: [Note; 3] = [Note::new(440, 80), Note::rest(20), Note::new(880, 100)];
    const SONGS: [Song<'static>; 2] = [Song::new("Beeps", &BEEPS), Song::new("Silence", &[])];

    #[test]
    fn song_reports_length_and_duration() {
        let song = Song::new("Beeps", &BEEPS);
        assert_eq!(song.len(), 3);
        assert!(!song.is_empty());
        assert_eq!(song.total_duration_ms(), 200);
        assert_eq!(song.note(1), Some(Note::rest(20)));
        assert!(song.note(1).unwrap().is_rest());
        assert_eq!(song.note(3), None);
    }

    #[test]
    fn catalog_lookup_by_index() {
        let catalog = SongCatalog::new(&SONGS);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name(0), Some("Beeps"));
        assert_eq!(catalog.name(1), Some("Silence"));
        assert_eq!(catalog.name(2), None);
        assert!(catalog.get(1).unwrap().is_empty());
    }

    #[test]
    fn next_index_wraps() {
        let catalog = SongCatalog::new(&SONGS);
        assert_eq!(catalog.next_index(0), 1);
        assert_eq!(catalog.next_index(1), 0);
        assert_eq!(SongCatalog::new(&[]).next_index(5), 0);
    }
}
