//! Built-in melodies for the speaker.

use crate::song::{Note, Song, SongCatalog};

const fn n(frequency_hz: u16, duration_ms: u16) -> Note {
    Note::new(frequency_hz, duration_ms)
}

/// Rising A4 to A5 and back, twice.
const ALARM: [Note; 52] = [
    n(440, 80), n(466, 80), n(494, 80), n(523, 80), n(554, 80), n(587, 80), n(622, 80), n(659, 80), n(698, 80), n(740, 80), n(784, 80), n(831, 80), n(880, 80),
    n(880, 80), n(831, 80), n(784, 80), n(740, 80), n(698, 80), n(659, 80), n(622, 80), n(587, 80), n(554, 80), n(523, 80), n(494, 80), n(466, 80), n(440, 80),
    n(440, 80), n(466, 80), n(494, 80), n(523, 80), n(554, 80), n(587, 80), n(622, 80), n(659, 80), n(698, 80), n(740, 80), n(784, 80), n(831, 80), n(880, 80),
    n(880, 80), n(831, 80), n(784, 80), n(740, 80), n(698, 80), n(659, 80), n(622, 80), n(587, 80), n(554, 80), n(523, 80), n(494, 80), n(466, 80), n(440, 80),
];

/// A5 and E5 bursts separated by short gaps.
const SIREN: [Note; 32] = [
    n(880, 200), n(0, 50), n(880, 200), n(0, 50), n(880, 200), n(0, 50), n(880, 200), n(0, 50),
    n(660, 200), n(0, 50), n(660, 200), n(0, 50), n(660, 200), n(0, 50), n(660, 200), n(0, 50),
    n(880, 200), n(0, 50), n(880, 200), n(0, 50), n(880, 200), n(0, 50), n(880, 200), n(0, 50),
    n(660, 200), n(0, 50), n(660, 200), n(0, 50), n(660, 200), n(0, 50), n(660, 200), n(0, 50),
];

const PARIS: [Note; 26] = [
    n(349, 187), n(0, 25), n(262, 187), n(0, 25), n(0, 375), n(0, 25), n(415, 187), n(0, 25),
    n(262, 187), n(0, 25), n(0, 375), n(0, 25), n(392, 187), n(0, 25), n(262, 187), n(0, 25),
    n(0, 375), n(0, 25), n(349, 187), n(0, 25), n(262, 187), n(0, 25), n(524, 187), n(0, 25),
    n(0, 187), n(0, 25),
];

const OVERTIME: [Note; 192] = [
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(0, 157), n(0, 50), n(740, 157), n(0, 50), n(988, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(1176, 157), n(0, 50), n(1108, 157), n(0, 50), n(0, 157), n(0, 50),
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(0, 157), n(0, 50), n(740, 157), n(0, 50), n(988, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(1176, 157), n(0, 50), n(1108, 157), n(0, 50), n(0, 157), n(0, 50),
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(0, 157), n(0, 50), n(740, 157), n(0, 50), n(988, 157), n(0, 50),
    n(1108, 157), n(0, 50), n(1176, 157), n(0, 50), n(1108, 157), n(0, 50), n(0, 157), n(0, 50),
    n(740, 157), n(0, 50), n(988, 157), n(0, 50), n(1108, 157), n(0, 50), n(1176, 157), n(0, 50),
    n(1176, 157), n(0, 50), n(1108, 157), n(0, 50), n(1108, 157), n(0, 50), n(988, 157), n(0, 50),
    n(988, 157), n(0, 50), n(880, 157), n(0, 50), n(880, 157), n(0, 50), n(784, 157), n(0, 50),
    n(740, 157), n(0, 50), n(0, 157), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(988, 157), n(0, 50), n(988, 157), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(660, 1263), n(0, 50), n(0, 315), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(988, 157), n(0, 50), n(988, 157), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(660, 1350), n(0, 50), n(0, 350), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(988, 157), n(0, 50), n(988, 157), n(0, 50), n(740, 157), n(0, 50), n(740, 157), n(0, 50),
    n(660, 1350), n(0, 50), n(0, 350), n(0, 50), n(660, 157), n(0, 50), n(588, 157), n(0, 50),
    n(660, 157), n(0, 50), n(588, 157), n(0, 50), n(660, 157), n(0, 50), n(588, 157), n(0, 50),
    n(740, 350), n(0, 50), n(988, 350), n(0, 50), n(740, 350), n(0, 50), n(988, 350), n(0, 50),
    n(740, 350), n(0, 50), n(988, 350), n(0, 50), n(740, 350), n(0, 50), n(988, 350), n(0, 50),
];

const NO_ROLE_MODELZ: [Note; 40] = [
    n(1048, 280), n(0, 50), n(1048, 125), n(0, 50), n(932, 125), n(0, 50), n(830, 125), n(0, 50),
    n(932, 125), n(0, 50), n(830, 125), n(0, 50), n(784, 125), n(0, 50), n(698, 280), n(0, 50),
    n(524, 280), n(0, 50), n(524, 280), n(0, 50), n(0, 550), n(0, 50), n(1048, 125), n(0, 50),
    n(932, 125), n(0, 50), n(830, 125), n(0, 50), n(932, 125), n(0, 50), n(830, 125), n(0, 50),
    n(784, 125), n(0, 50), n(698, 280), n(0, 50), n(524, 280), n(0, 50), n(524, 280), n(0, 50),
];

const DIES_IRAE: [Note; 16] = [
    n(622, 315), n(0, 50), n(588, 315), n(0, 50), n(622, 315), n(0, 50), n(524, 315), n(0, 50),
    n(588, 315), n(0, 50), n(466, 315), n(0, 50), n(524, 315), n(0, 50), n(440, 315), n(0, 50),
];

const HIGHEST_IN_THE_ROOM: [Note; 18] = [
    n(1244, 473), n(0, 50), n(1320, 315), n(0, 50), n(1480, 315), n(1244, 500), n(0, 50), n(0, 947),
    n(0, 50), n(1108, 473), n(0, 50), n(988, 315), n(0, 50), n(1108, 315), n(932, 500), n(0, 50),
    n(0, 947), n(0, 50),
];

pub const SONGS: [Song<'static>; 7] = [
    Song::new("Alarm", &ALARM),
    Song::new("Emergency Siren", &SIREN),
    Song::new("Paris song", &PARIS),
    Song::new("Overtime", &OVERTIME),
    Song::new("No Role Modelz", &NO_ROLE_MODELZ),
    Song::new("Dies Irae", &DIES_IRAE),
    Song::new("Highest in the Room", &HIGHEST_IN_THE_ROOM),
];

pub const CATALOG: SongCatalog<'static> = SongCatalog::new(&SONGS);

pub const ALARM_INDEX: usize = 0;
pub const SIREN_INDEX: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_firmware_order() {
        let names: [&str; 7] = core::array::from_fn(|i| CATALOG.name(i).unwrap());
        assert_eq!(
            names,
            [
                "Alarm",
                "Emergency Siren",
                "Paris song",
                "Overtime",
                "No Role Modelz",
                "Dies Irae",
                "Highest in the Room",
            ]
        );
        assert_eq!(CATALOG.name(ALARM_INDEX), Some("Alarm"));
        assert_eq!(CATALOG.name(SIREN_INDEX), Some("Emergency Siren"));
    }

    #[test]
    fn song_lengths() {
        let lengths: [usize; 7] = core::array::from_fn(|i| CATALOG.get(i).unwrap().len());
        assert_eq!(lengths, [52, 32, 26, 192, 40, 16, 18]);
    }

    #[test]
    fn alarm_sweeps_between_a4_and_a5() {
        let alarm = CATALOG.get(ALARM_INDEX).unwrap();
        assert!(alarm.notes.iter().all(|n| n.duration_ms == 80));
        assert_eq!(alarm.note(0), Some(Note::new(440, 80)));
        assert_eq!(alarm.note(12), Some(Note::new(880, 80)));
        assert_eq!(alarm.note(51), Some(Note::new(440, 80)));
    }

    #[test]
    fn siren_alternates_tone_and_rest() {
        let siren = CATALOG.get(SIREN_INDEX).unwrap();
        for (i, note) in siren.notes.iter().enumerate() {
            if i % 2 == 0 {
                assert!(!note.is_rest());
                assert_eq!(note.duration_ms, 200);
            } else {
                assert!(note.is_rest());
                assert_eq!(note.duration_ms, 50);
            }
        }
        assert_eq!(siren.total_duration_ms(), 16 * 250);
    }

    #[test]
    fn every_song_is_playable() {
        for song in CATALOG.iter() {
            assert!(!song.is_empty(), "{} has no notes", song.name);
            assert!(song.notes.iter().all(|n| n.duration_ms > 0));
        }
    }
}
