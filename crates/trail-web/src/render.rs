//! Layered 2D-canvas painting: per-zone glow + core strokes, then particles.

use crate::constants::*;
use glam::Vec2;
use std::f64::consts::TAU;
use trail_core::constants::{BASE_RADIUS, FADE_ZONES};
use trail_core::{plan_zones, Particle, TrailSim, Zone};
use web_sys as web;

/// Paint one frame. Runs strictly after the simulation step; clears the whole
/// surface, then draws nothing further until at least one cubic segment of
/// history exists. Draw calls are bounded by `FADE_ZONES * 2` strokes plus one
/// fill per active particle.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    samples: &[Vec2],
    sim: &TrailSim,
) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    if samples.len() < 2 {
        return;
    }

    for zone in plan_zones(samples.len(), FADE_ZONES, BASE_RADIUS)
        .iter()
        .filter(|z| z.visible())
    {
        let last = zone.end.min(samples.len() - 1);
        if last <= zone.start {
            continue;
        }
        let hue = (sim.hue() + zone.hue_offset) % 360.0;
        stroke_glow(ctx, samples, zone, last, hue);
        stroke_core(ctx, samples, zone, last, hue);
    }

    paint_particles(ctx, sim.particles().active());
}

/// Wide, translucent pass; shadowBlur stands in for a bloom filter.
fn stroke_glow(
    ctx: &web::CanvasRenderingContext2d,
    samples: &[Vec2],
    zone: &Zone,
    last: usize,
    hue: f32,
) {
    let color = format!("hsl({hue:.1}, 100%, {GLOW_LIGHTNESS}%)");
    ctx.save();
    ctx.set_global_alpha((zone.alpha * GLOW_ALPHA) as f64);
    ctx.set_line_width(zone.width as f64 * GLOW_WIDTH_MULT);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_stroke_style_str(&color);
    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.set_shadow_color(&color);
    trace_zone(ctx, samples, zone.start, last);
    ctx.stroke();
    ctx.restore();
}

/// Narrow, brighter pass on the same geometry, hue-shifted toward the glow's
/// complement for the additive-bloom look.
fn stroke_core(
    ctx: &web::CanvasRenderingContext2d,
    samples: &[Vec2],
    zone: &Zone,
    last: usize,
    hue: f32,
) {
    let core_hue = (hue + CORE_HUE_SHIFT) % 360.0;
    ctx.save();
    ctx.set_global_alpha((zone.alpha * CORE_ALPHA) as f64);
    ctx.set_line_width((zone.width as f64 * CORE_WIDTH_MULT).max(CORE_WIDTH_MIN));
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_stroke_style_str(&format!("hsl({core_hue:.1}, 100%, {CORE_LIGHTNESS}%)"));
    ctx.set_shadow_blur(CORE_BLUR);
    ctx.set_shadow_color(&format!(
        "hsl({core_hue:.1}, 100%, {CORE_SHADOW_LIGHTNESS}%)"
    ));
    trace_zone(ctx, samples, zone.start, last);
    ctx.stroke();
    ctx.restore();
}

/// Build one continuous path over the zone's samples, joining through segment
/// midpoints with quadratics so the stroke has no visible facets.
fn trace_zone(ctx: &web::CanvasRenderingContext2d, samples: &[Vec2], first: usize, last: usize) {
    ctx.begin_path();
    ctx.move_to(samples[first].x as f64, samples[first].y as f64);
    for i in first + 1..=last {
        if i < samples.len() - 1 {
            let mid = (samples[i] + samples[i + 1]) * 0.5;
            ctx.quadratic_curve_to(
                samples[i].x as f64,
                samples[i].y as f64,
                mid.x as f64,
                mid.y as f64,
            );
        } else {
            ctx.line_to(samples[i].x as f64, samples[i].y as f64);
        }
    }
}

fn paint_particles(ctx: &web::CanvasRenderingContext2d, particles: &[Particle]) {
    ctx.save();
    ctx.set_shadow_blur(PX_BLUR);
    for p in particles {
        let a = p.life_frac() * PX_ALPHA;
        ctx.set_shadow_color(&format!(
            "hsla({:.1}, 100%, {PX_SHADOW_LIGHTNESS}%, {a:.3})",
            p.hue
        ));
        ctx.set_fill_style_str(&format!("hsla({:.1}, 100%, {PX_LIGHTNESS}%, {a:.3})", p.hue));
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
        ctx.fill();
    }
    ctx.restore();
}
