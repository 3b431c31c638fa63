/*
General MIDI Percussion Map
===========================

Note numbers on the percussion channel (channel 10, zero-based 9) name an
instrument rather than a pitch. Each constant below is the note that plays it.

Some instruments answer to several notes:

  snare        38 acoustic, 40 electric, 37 side stick
  bass drum    35 acoustic, 36 electric
  hi-hat       42 closed, 46 open, 44 pedal
  ride         51 ride 1, 59 ride 2, 53 bell (on whichever ride was last used)
  congas       62 mute high, 63 open high, 64 low
  cuica        78 mute, 79 open
  triangle     80 mute, 81 open
  surdo        86 mute, 87 open

Notes outside 27..=87 have no instrument and are ignored.
*/

pub const HIGH_Q: u8 = 27;
pub const SLAP: u8 = 28;
pub const STICKS: u8 = 31;
pub const SQUARE_CLICK: u8 = 32;
pub const METRONOME_CLICK: u8 = 33;
pub const METRONOME_BELL: u8 = 34;
pub const ACOUSTIC_BASS_DRUM: u8 = 35;
pub const ELECTRIC_BASS_DRUM: u8 = 36;
pub const SIDE_STICK: u8 = 37;
pub const ACOUSTIC_SNARE: u8 = 38;
pub const HAND_CLAP: u8 = 39;
pub const ELECTRIC_SNARE: u8 = 40;
pub const LOW_FLOOR_TOM: u8 = 41;
pub const CLOSED_HI_HAT: u8 = 42;
pub const HIGH_FLOOR_TOM: u8 = 43;
pub const PEDAL_HI_HAT: u8 = 44;
pub const LOW_TOM: u8 = 45;
pub const OPEN_HI_HAT: u8 = 46;
pub const LOW_MID_TOM: u8 = 47;
pub const HIGH_MID_TOM: u8 = 48;
pub const CRASH_CYMBAL_1: u8 = 49;
pub const HIGH_TOM: u8 = 50;
pub const RIDE_CYMBAL_1: u8 = 51;
pub const CHINESE_CYMBAL: u8 = 52;
pub const RIDE_BELL: u8 = 53;
pub const TAMBOURINE: u8 = 54;
pub const SPLASH_CYMBAL: u8 = 55;
pub const COWBELL: u8 = 56;
pub const CRASH_CYMBAL_2: u8 = 57;
pub const RIDE_CYMBAL_2: u8 = 59;
pub const HIGH_BONGO: u8 = 60;
pub const LOW_BONGO: u8 = 61;
pub const MUTE_HIGH_CONGA: u8 = 62;
pub const OPEN_HIGH_CONGA: u8 = 63;
pub const LOW_CONGA: u8 = 64;
pub const HIGH_TIMBALE: u8 = 65;
pub const LOW_TIMBALE: u8 = 66;
pub const HIGH_AGOGO: u8 = 67;
pub const LOW_AGOGO: u8 = 68;
pub const CABASA: u8 = 69;
pub const MARACAS: u8 = 70;
pub const SHORT_WHISTLE: u8 = 71;
pub const LONG_WHISTLE: u8 = 72;
pub const SHORT_GUIRO: u8 = 73;
pub const LONG_GUIRO: u8 = 74;
pub const CLAVES: u8 = 75;
pub const HIGH_WOODBLOCK: u8 = 76;
pub const LOW_WOODBLOCK: u8 = 77;
pub const MUTE_CUICA: u8 = 78;
pub const OPEN_CUICA: u8 = 79;
pub const MUTE_TRIANGLE: u8 = 80;
pub const OPEN_TRIANGLE: u8 = 81;
pub const SHAKER: u8 = 82;
pub const JINGLE_BELL: u8 = 83;
pub const CASTANETS: u8 = 85;
pub const MUTE_SURDO: u8 = 86;
pub const OPEN_SURDO: u8 = 87;

/// Lowest and highest percussion notes with an instrument
pub const PERCUSSION_RANGE: std::ops::RangeInclusive<u8> = HIGH_Q..=OPEN_SURDO;

/// GM program number of the Reverse Cymbal (zero-based)
pub const REVERSE_CYMBAL_PROGRAM: u8 = 119;
