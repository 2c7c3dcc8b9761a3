use std::io::{self, Write};

use log::LevelFilter;
use vekit::*;

fn main() -> Result<(), KitError> {
    env_logger::Builder::new()
        .filter(Some("vekit"), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let a = vec3(1.0f32, -2.0, 3.0);
    let b = Vec3f::fill(2.0);
    a.debug(&mut out, "a = ")?;
    b.debug(&mut out, "b = ")?;
    a.add(b).debug(&mut out, "a + b = ")?;
    a.sub(b).debug(&mut out, "a - b = ")?;
    a.mul(b).debug(&mut out, "a * b = ")?;
    a.div(b).debug(&mut out, "a / b = ")?;
    writeln!(out, "dot(a, b) = {:.2}", a.dot(b))?;
    writeln!(out, "len_squared(a) = {:.2}", a.len_squared())?;
    writeln!(out, "len(a) = {:.2}", a.len())?;
    a.normalize(1e-6, Vec3f::fill(0.0))
        .debug(&mut out, "normalize(a) = ")?;
    Vec3f::fill(0.0)
        .normalize(1e-6, vec3(0.0, 0.0, 1.0))
        .debug(&mut out, "normalize(0) = ")?;
    a.reflect(vec3(0.0, 1.0, 0.0))
        .debug(&mut out, "reflect(a, y) = ")?;
    a.clamp(Vec3f::fill(-1.0), Vec3f::fill(1.0))
        .debug(&mut out, "clamp(a, -1, 1) = ")?;
    a.lerp(b, Vec3f::fill(0.5))
        .debug(&mut out, "lerp(a, b, 0.5) = ")?;

    let ua = vec4(8u32, 4, 2, 1);
    let ub = Vec4u::fill(2);
    ua.debug(&mut out, "ua = ")?;
    ua.div(ub).debug(&mut out, "ua / ub = ")?;
    ua.min(ub).debug(&mut out, "min(ua, ub) = ")?;
    ua.max(ub).debug(&mut out, "max(ua, ub) = ")?;
    ua.pow(ub).debug(&mut out, "pow(ua, ub) = ")?;
    vec2(0u32, 1).sub(vec2(1, 1)).debug(&mut out, "wrapped = ")?;

    vec2(Extended(1.0), Extended(2.0)).debug(&mut out, "ld = ")?;
    vec2(-3i64, 4).debug(&mut out, "li = ")?;

    match vec2(1i32, 2).checked_div(vec2(1, 0)) {
        Ok(v) => v.debug(&mut out, "checked = ")?,
        Err(e) => log::warn!("checked_div failed: {}", e),
    }

    Ok(())
}
