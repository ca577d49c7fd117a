use anyhow::{Context, Result};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let roles = [
        "Web Developer",
        "Data Analyst",
        "QA Engineer",
        "DevOps Engineer",
        "Systems Administrator",
        "Product Manager",
        "UX Designer",
    ];
    let seniorities = ["Junior", "", "Senior", "Lead"];
    let employers = [
        "Acme Inc",
        "Enterprise Holdings, Inc",
        "Globex Corporation",
        "Initech",
        "LaunchPad Recruits",
        "Cerner Corporation",
        "World Wide Technology",
    ];
    let locations = [
        "Saint Louis",
        "Kansas City",
        "Columbia",
        "Springfield",
        "Remote",
    ];
    let position_types = ["Full Time", "Part Time", "Contract", "Internship"];
    let competencies = [
        "JavaScript",
        "Python",
        "Ruby",
        "SQL",
        "C#",
        "Statistical Analysis",
        "Project Management",
    ];

    let output_path = "data/job_data.csv";
    std::fs::create_dir_all("data").context("creating data directory")?;

    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["name", "employer", "location", "position type", "core competency"])?;

    let rows = 60;
    for _ in 0..rows {
        let seniority = rng.pick(&seniorities);
        let role = rng.pick(&roles);
        let name = if seniority.is_empty() {
            (*role).to_string()
        } else {
            format!("{seniority} {role}")
        };

        let employer = *rng.pick(&employers);
        let location = *rng.pick(&locations);
        let position_type = *rng.pick(&position_types);
        let competency = *rng.pick(&competencies);

        writer.write_record([name.as_str(), employer, location, position_type, competency])?;
    }

    writer.flush().context("flushing output file")?;
    println!("Wrote {rows} job listings to {output_path}");
    Ok(())
}
