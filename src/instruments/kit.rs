use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    collect::EventCollector,
    scene::RenderState,
    timeline::{Event, Hit, ProgramEvent},
};

use super::{
    agogo, bongos, cabasa, castanets, china, claves, congas, cowbell, crash_1, crash_2, hand_clap,
    jingle_bells, maracas, notes::*, ride_1, ride_2, shaker, slap, splash, split_rides, square_click,
    sticks, tambourine, timbales, tom, woodblocks, BassDrum, Cuica, Guiro, HiHat, HighQ, Instrument,
    Metronome, SnareDrum, Surdo, Triangle, Whistle, Setup,
};

/// The GM drum kit selected by a program change on the percussion channel
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrumKit {
    #[default]
    Standard,
    Room,
    Power,
    Electronic,
    Analog,
    Jazz,
    Brush,
    Orchestra,
    Sfx,
}

impl DrumKit {
    /// Zero-based GM program number to kit. Unassigned programs fall back to
    /// the standard kit.
    pub fn from_program(program: u8) -> Self {
        match program {
            8..=15 => DrumKit::Room,
            16..=23 => DrumKit::Power,
            24 => DrumKit::Electronic,
            25..=31 => DrumKit::Analog,
            32..=39 => DrumKit::Jazz,
            40..=47 => DrumKit::Brush,
            48..=55 => DrumKit::Orchestra,
            56..=63 => DrumKit::Sfx,
            _ => DrumKit::Standard,
        }
    }
}

impl fmt::Display for DrumKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrumKit::Standard => "standard",
            DrumKit::Room => "room",
            DrumKit::Power => "power",
            DrumKit::Electronic => "electronic",
            DrumKit::Analog => "analog",
            DrumKit::Jazz => "jazz",
            DrumKit::Brush => "brush",
            DrumKit::Orchestra => "orchestra",
            DrumKit::Sfx => "sfx",
        };
        f.write_str(name)
    }
}

/// Box and keep an instrument only if its notes are played
fn include<I, F>(instruments: &mut Vec<Box<dyn Instrument>>, played: bool, build: F)
where
    I: Instrument + 'static,
    F: FnOnce() -> I,
{
    if played {
        instruments.push(Box::new(build()));
    }
}

const TOMS: [u8; 6] = [LOW_FLOOR_TOM, HIGH_FLOOR_TOM, LOW_TOM, LOW_MID_TOM, HIGH_MID_TOM, HIGH_TOM];

/// Every instrument played on the percussion channel, plus the drum kit
/// selected for it
pub struct PercussionKit {
    instruments: Vec<Box<dyn Instrument>>,
    programs: EventCollector<ProgramEvent>,
    kit: DrumKit,
}

impl PercussionKit {
    /// Assemble the instruments that the percussion channel's `events`
    /// actually play. Notes with no instrument are ignored.
    pub fn build(events: &[Event], setup: &Setup) -> Self {
        let hits: Vec<Hit> = events
            .iter()
            .filter_map(Event::as_hit)
            .filter(|h| PERCUSSION_RANGE.contains(&h.note))
            .collect();
        let programs: Vec<ProgramEvent> = events.iter().filter_map(Event::as_program).collect();
        let plays = |notes: &[u8]| hits.iter().any(|h| notes.contains(&h.note));

        let mut instruments: Vec<Box<dyn Instrument>> = Vec::new();
        let list = &mut instruments;

        include(list, plays(&[ACOUSTIC_BASS_DRUM, ELECTRIC_BASS_DRUM]), || BassDrum::new(&hits, setup));
        include(list, plays(&[ACOUSTIC_SNARE, ELECTRIC_SNARE, SIDE_STICK]), || SnareDrum::new(&hits, setup));
        include(list, plays(&[CLOSED_HI_HAT, OPEN_HI_HAT, PEDAL_HI_HAT]), || HiHat::new(&hits, setup));
        for note in TOMS {
            include(list, plays(&[note]), || tom(note, &hits, setup));
        }
        include(list, plays(&[CRASH_CYMBAL_1]), || crash_1(&hits, setup));
        include(list, plays(&[CRASH_CYMBAL_2]), || crash_2(&hits, setup));
        include(list, plays(&[SPLASH_CYMBAL]), || splash(&hits, setup));
        include(list, plays(&[CHINESE_CYMBAL]), || china(&hits, setup));

        let (first_ride, second_ride) = split_rides(&hits);
        include(list, !first_ride.is_empty(), || ride_1(&hits, setup));
        include(list, !second_ride.is_empty(), || ride_2(&hits, setup));

        include(list, plays(&[MUTE_HIGH_CONGA, OPEN_HIGH_CONGA, LOW_CONGA]), || congas(&hits, setup));
        include(list, plays(&[HIGH_BONGO, LOW_BONGO]), || bongos(&hits, setup));
        include(list, plays(&[HIGH_TIMBALE, LOW_TIMBALE]), || timbales(&hits, setup));
        include(list, plays(&[HIGH_WOODBLOCK, LOW_WOODBLOCK]), || woodblocks(&hits, setup));
        include(list, plays(&[HIGH_AGOGO, LOW_AGOGO]), || agogo(&hits, setup));
        include(list, plays(&[COWBELL]), || cowbell(&hits, setup));
        include(list, plays(&[CLAVES]), || claves(&hits, setup));
        include(list, plays(&[MARACAS]), || maracas(&hits, setup));
        include(list, plays(&[HAND_CLAP]), || hand_clap(&hits, setup));
        include(list, plays(&[SLAP]), || slap(&hits, setup));
        include(list, plays(&[CASTANETS]), || castanets(&hits, setup));
        include(list, plays(&[TAMBOURINE]), || tambourine(&hits, setup));
        include(list, plays(&[SHAKER]), || shaker(&hits, setup));
        include(list, plays(&[CABASA]), || cabasa(&hits, setup));
        include(list, plays(&[STICKS]), || sticks(&hits, setup));
        include(list, plays(&[JINGLE_BELL]), || jingle_bells(&hits, setup));
        include(list, plays(&[SQUARE_CLICK]), || square_click(&hits, setup));
        include(list, plays(&[METRONOME_CLICK, METRONOME_BELL]), || Metronome::new(&hits, setup));
        include(list, plays(&[SHORT_WHISTLE, LONG_WHISTLE]), || Whistle::new(&hits, setup));
        include(list, plays(&[MUTE_SURDO, OPEN_SURDO]), || Surdo::new(&hits, setup));
        include(list, plays(&[SHORT_GUIRO, LONG_GUIRO]), || Guiro::new(&hits, setup));
        include(list, plays(&[MUTE_CUICA, OPEN_CUICA]), || Cuica::new(&hits, setup));
        include(list, plays(&[MUTE_TRIANGLE, OPEN_TRIANGLE]), || Triangle::new(&hits, setup));
        include(list, plays(&[HIGH_Q]), || HighQ::new(&hits, setup));

        Self {
            instruments,
            programs: EventCollector::new(programs),
            kit: DrumKit::default(),
        }
    }

    pub fn tick(&mut self, time: f64, delta: f32) -> Vec<RenderState> {
        if let Some(change) = self.programs.advance_collect_one(time) {
            self.kit = DrumKit::from_program(change.program);
        }
        self.instruments
            .iter_mut()
            .map(|instrument| instrument.tick(time, delta))
            .collect()
    }

    pub fn seek(&mut self, time: f64) {
        self.programs.seek(time);
        self.kit = self
            .programs
            .prev()
            .map_or(DrumKit::default(), |change| DrumKit::from_program(change.program));
        for instrument in &mut self.instruments {
            instrument.seek(time);
        }
    }

    /// The drum kit in effect as of the last tick or seek
    pub fn current_kit(&self) -> DrumKit {
        self.kit
    }

    /// Names of the instruments on stage, in render order
    pub fn names(&self) -> Vec<&'static str> {
        self.instruments.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
