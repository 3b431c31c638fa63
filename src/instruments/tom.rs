use crate::timeline::Hit;

use super::{notes, Setup, StruckInstrument};

/// One tom of the kit, struck by a single stick
pub fn tom(note: u8, hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder(tom_name(note), hits, setup)
        .voice("stick", &[note])
        .body("drum", &["stick"])
        .build()
}

fn tom_name(note: u8) -> &'static str {
    match note {
        notes::LOW_FLOOR_TOM => "low_floor_tom",
        notes::HIGH_FLOOR_TOM => "high_floor_tom",
        notes::LOW_TOM => "low_tom",
        notes::LOW_MID_TOM => "low_mid_tom",
        notes::HIGH_MID_TOM => "high_mid_tom",
        _ => "high_tom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageConfig, instruments::test_support::*, instruments::Instrument};

    #[test]
    fn ignores_other_toms() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, notes::LOW_TOM, 100), hit(1.0, notes::HIGH_TOM, 100)];
        let mut low = tom(notes::LOW_TOM, &hits, &setup);
        assert_eq!(low.name(), "low_tom");

        let mut strikes = 0;
        play(2.0, |time, delta| {
            let state = low.tick(time, delta);
            if state.part("drum").is_some_and(|p| p.offset.y < -1.5) {
                strikes += 1;
            }
        });
        assert_eq!(strikes, 1);
    }
}
