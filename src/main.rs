#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, bail};
use klein_life::config::LifeConfig;
use klein_life::{Anchor, Topology};
use log::info;

const DEFAULT_GENERATIONS: u64 = 100;

const USAGE: &str = "\
usage: klein-life -f FILE [options]

  -f FILE   primary pattern file (required)
  -o X,Y    anchor for FILE; cannot be combined with -x or -y
  -x X      column anchor for FILE (default: grid center)
  -y Y      row anchor for FILE (default: grid center)
  -P FILE   second pattern file
  -p X,Y    anchor for the second file (default: grid center)
  -Q FILE   third pattern file
  -q X,Y    anchor for the third file (default: grid center)
  -w PIXELS grid width in pixels (default 800)
  -h PIXELS grid height in pixels (default 600)
  -s SIZE   cell size in pixels: 2, 4, 8 or 16 (default 8)
  -e EDGE   hedge, torus or klein (default torus)
  -g N      generations to run (default 100)
  -H        print this help";

struct MainArgs {
    config: LifeConfig,
    generations: u64,
}

fn parse_args() -> anyhow::Result<Option<MainArgs>> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = LifeConfig::default();
    let mut generations = DEFAULT_GENERATIONS;
    let mut second: Option<String> = None;
    let mut second_anchor: Option<Anchor> = None;
    let mut third: Option<String> = None;
    let mut third_anchor: Option<Anchor> = None;

    let next_arg = |i: usize, flag: &str| -> anyhow::Result<&str> {
        args.get(i)
            .map(String::as_str)
            .with_context(|| format!("option '{flag}' requires an argument"))
    };
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-H" | "--help" => return Ok(None),
            "-w" | "-h" | "-s" | "-g" => {
                i += 1;
                let value = next_arg(i, flag)?;
                let n: u64 = value
                    .parse()
                    .with_context(|| format!("{flag} requires a non-negative integer, got {value:?}"))?;
                let pixels = || u32::try_from(n).with_context(|| format!("{flag} value {n} is too large"));
                match flag {
                    "-w" => config.pixel_width = pixels()?,
                    "-h" => config.pixel_height = pixels()?,
                    "-s" => config = config.cell_size(pixels()?),
                    _ => generations = n,
                }
            }
            "-f" => {
                i += 1;
                config = config.pattern(next_arg(i, flag)?);
            }
            "-o" => {
                i += 1;
                config = config.offset(next_arg(i, flag)?.parse()?);
            }
            "-x" | "-y" => {
                i += 1;
                let value = next_arg(i, flag)?;
                let n: i32 = value
                    .parse()
                    .with_context(|| format!("{flag} requires an integer, got {value:?}"))?;
                config = if flag == "-x" {
                    config.offset_x(n)
                } else {
                    config.offset_y(n)
                };
            }
            "-P" => {
                i += 1;
                second = Some(next_arg(i, flag)?.to_string());
            }
            "-p" => {
                i += 1;
                second_anchor = Some(next_arg(i, flag)?.parse()?);
            }
            "-Q" => {
                i += 1;
                third = Some(next_arg(i, flag)?.to_string());
            }
            "-q" => {
                i += 1;
                third_anchor = Some(next_arg(i, flag)?.parse()?);
            }
            "-e" => {
                i += 1;
                config = config.topology(next_arg(i, flag)?.parse::<Topology>()?);
            }
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }

    if let Some(path) = second {
        config = config.second(path, second_anchor);
    }
    if let Some(path) = third {
        config = config.third(path, third_anchor);
    }
    Ok(Some(MainArgs {
        config,
        generations,
    }))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let setup = args.config.resolve()?;
    info!(
        "{}x{} cells, {} edges, {} pattern file(s)",
        setup.width,
        setup.height,
        setup.topology,
        setup.placements.len()
    );
    let mut life = setup.build().context("failed to seed the grid")?;
    info!("generation 0: population {}", life.population());

    life.step_n(args.generations);

    info!(
        "generation {}: population {}",
        life.generation(),
        life.population()
    );
    print!("{}", life.grid());
    life.release();
    Ok(())
}
