// Terminal demo: a handful of tweens rendered as bars, ticked from an
// Instant-based update loop. Reads an optional demo.toml next to the binary
// for custom motions:
//
//   frame_ms = 16
//
//   [[motions]]
//   from = 0.0
//   to = 1.0
//   duration = 1.2
//   ease = "bounce_out"

use anyhow::Result;
use log::info;
use rand::Rng;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use twixt::{lerp, Ease, Motion, Pool};

const BAR_WIDTH: usize = 48;

#[derive(Debug, Clone, Deserialize)]
struct DemoConfig {
    #[serde(default = "default_motions")]
    motions: Vec<Motion>,
    #[serde(default = "default_frame_ms")]
    frame_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            motions: default_motions(),
            frame_ms: default_frame_ms(),
        }
    }
}

fn default_motions() -> Vec<Motion> {
    let curves = [
        Ease::Linear,
        Ease::QuadInOut,
        Ease::CubicOut,
        Ease::ElasticOut,
        Ease::BounceOut,
        Ease::BackInOut,
        Ease::Bezier,
    ];
    let mut rng = rand::thread_rng();
    curves
        .iter()
        .map(|&ease| Motion {
            from: 0.0,
            to: 1.0,
            duration: rng.gen_range(0.8..2.0),
            ease,
        })
        .collect()
}

fn default_frame_ms() -> u64 {
    16
}

fn load_config() -> Result<DemoConfig> {
    let path = std::path::Path::new("demo.toml");
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(DemoConfig::default())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config().unwrap_or_default();
    info!("running {} motions", config.motions.len());

    let mut pool: Pool = Pool::new();
    let mut values = Vec::new();
    let mut labels = Vec::new();
    let done = Rc::new(RefCell::new(0usize));
    let total = config.motions.len();

    for motion in &config.motions {
        let value = Rc::new(RefCell::new(motion.from));
        let sink = value.clone();
        let finished = done.clone();
        let tween = motion
            .tween(move |v| *sink.borrow_mut() = v)
            .then(move || *finished.borrow_mut() += 1);
        pool.start(tween)?;
        values.push(value);
        labels.push(format!("{:?}", motion.ease));
    }

    let mut last_frame = Instant::now();
    while *done.borrow() < total {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        pool.eval(dt);

        print!("\x1b[2J\x1b[H");
        for (label, value) in labels.iter().zip(&values) {
            let v = value.borrow().clamp(0.0, 1.0);
            let cols = lerp(0.0, BAR_WIDTH as f32, v) as usize;
            println!("{label:>14} |{}{}|", "#".repeat(cols), " ".repeat(BAR_WIDTH - cols));
        }
        println!("\n{} of {total} finished", *done.borrow());

        std::thread::sleep(std::time::Duration::from_millis(config.frame_ms));
    }

    info!("all motions finished");
    Ok(())
}
