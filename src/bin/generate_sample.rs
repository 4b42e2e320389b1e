use serde::Serialize;

/// One output row, in the column layout the dashboard reads.
#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (category, payload ceiling in kg, success probability)
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.2),
    ("v1.1", 4500.0, 0.35),
    ("FT", 6800.0, 0.8),
    ("B4", 7000.0, 0.55),
    ("B5", 9600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_launches = 56;

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    for flight in 1..=n_launches {
        // Later flights use later boosters.
        let era = ((flight - 1) as usize * BOOSTERS.len()) / n_launches as usize;
        let (category, ceiling, p_success) = BOOSTERS[era];
        let site = *rng.pick(&SITES);

        let payload = (rng.next_f64() * ceiling).round();
        let class = u8::from(rng.next_f64() < p_success);

        writer.serialize(LaunchRow {
            flight_number: flight,
            launch_site: site,
            class,
            payload_mass_kg: payload,
            booster_version: format!("F9 {category} B{:04}", 1000 + flight),
            booster_version_category: category,
        })?;
    }
    writer.flush()?;

    println!("Wrote {n_launches} launches to {output_path}");
    Ok(())
}
