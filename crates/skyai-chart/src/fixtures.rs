// File: crates/skyai-chart/src/fixtures.rs
// Summary: Dashboard fixture data: the literal 5-sample environmental table and a seeded 24h history.

use chrono::{Duration, NaiveDateTime};

use crate::sample::Sample;

/// Source of uniform values in `[0, 1)`. Injected so fixtures are reproducible.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// SplitMix64 generator; the same seed always yields the same stream.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        // top 53 bits -> [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// The five-row environmental table shown on the dashboard's trend charts.
pub fn environmental_snapshot() -> Vec<Sample> {
    const ROWS: [(&str, [f64; 9]); 5] = [
        ("00:00", [22.5, 65.0, 400.0, 2.1, 0.0, 1013.2, 21.8, 45.0, 6.5]),
        ("06:00", [20.1, 70.0, 380.0, 1.8, 150.0, 1013.8, 21.2, 48.0, 6.4]),
        ("12:00", [26.3, 58.0, 420.0, 3.2, 850.0, 1012.5, 24.1, 42.0, 6.6]),
        ("18:00", [24.8, 62.0, 390.0, 2.7, 320.0, 1012.9, 23.5, 44.0, 6.5]),
        ("24:00", [22.0, 68.0, 375.0, 1.9, 0.0, 1013.1, 22.0, 46.0, 6.4]),
    ];
    const KEYS: [&str; 9] =
        ["temp", "humidity", "co2", "wind", "light", "pressure", "soilTemp", "soilMoisture", "ph"];

    ROWS.iter()
        .map(|(time, values)| {
            KEYS.iter()
                .zip(values)
                .fold(Sample::new(*time), |s, (k, v)| s.with(*k, *v))
        })
        .collect()
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

/// Hourly readings for the `hours` hours ending at `end`, labelled `HH:MM`.
///
/// Temperature and humidity follow slow sine waves plus noise; lighting is
/// high during the daytime slots (index 6..=18) and low otherwise. Every
/// metric preset key is present, so any card can plot the history.
pub fn environmental_history(
    rng: &mut impl RandomSource,
    end: NaiveDateTime,
    hours: usize,
) -> Vec<Sample> {
    (0..hours)
        .map(|i| {
            let t = i as f64;
            let at = end - Duration::hours((hours - 1 - i) as i64);
            let temp = 22.0 + (t * 0.2).sin() * 3.0 + rng.next_f64() * 2.0;
            let humidity = 65.0 + (t * 0.15).sin() * 10.0 + rng.next_f64() * 5.0;
            let co2 = 400.0 + rng.next_f64() * 100.0;
            let light = if (6..=18).contains(&i) {
                800.0 + rng.next_f64() * 200.0
            } else {
                50.0 + rng.next_f64() * 30.0
            };
            let ph = 6.0 + rng.next_f64();
            let soil_moisture = 60.0 + rng.next_f64() * 20.0;
            let wind = 1.5 + rng.next_f64() * 2.0;
            let pressure = 1012.5 + (t * 0.1).cos() * 0.6 + rng.next_f64() * 0.4;
            // soil lags the air: same wave, shifted two hours and damped
            let soil_temp = 21.0 + ((t - 2.0) * 0.2).sin() * 1.5 + rng.next_f64();

            Sample::new(at.format("%H:%M").to_string())
                .with("temp", round_to(temp, 1))
                .with("humidity", round_to(humidity, 1))
                .with("co2", round_to(co2, 0))
                .with("light", round_to(light, 0))
                .with("ph", round_to(ph, 2))
                .with("soilMoisture", round_to(soil_moisture, 1))
                .with("wind", round_to(wind, 1))
                .with("pressure", round_to(pressure, 1))
                .with("soilTemp", round_to(soil_temp, 1))
        })
        .collect()
}
