//! vec4d - 4D vector report
//!
//! Usage: `vec4d [A] [B]` where each vector is `x,y,z,w` or `vec4: (x, y, z, w)`.

use std::process::ExitCode;

use vec4d::config::AppConfig;
use vec4d::report::{parse_operand, VectorReport};
use vec4d::Vec4;

const DEFAULT_A: Vec4<f64> = Vec4::new(1.0, 2.0, 3.0, 4.0);
const DEFAULT_B: Vec4<f64> = Vec4::new(2.0, 3.0, 2.0, 5.0);

fn main() -> ExitCode {
    // Load configuration before the logger so the level can come from it
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::new()
        .parse_filters(&log_level)
        .parse_default_env()
        .init();

    // A broken config is not fatal: warn and run with defaults
    let config = AppConfig::or_defaults(loaded);
    log::debug!("config: {:?}", config);

    let mut args = std::env::args().skip(1);
    let a = match parse_operand(args.next().as_deref(), DEFAULT_A) {
        Ok(v) => v,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let b = match parse_operand(args.next().as_deref(), DEFAULT_B) {
        Ok(v) => v,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if args.next().is_some() {
        log::warn!("Ignoring arguments after the second vector");
    }

    print!("{}", VectorReport::build(a, b, &config));
    ExitCode::SUCCESS
}
