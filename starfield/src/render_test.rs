#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::config::StarfieldConfig;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Viewport),
    Fill(String),
    Circle { x: f64, y: f64, radius: f64, alpha: f64 },
    ResetAlpha,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    fail_after: Option<usize>,
}

impl Painter for Recorder {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.ops.push(Op::Clear(viewport));
        Ok(())
    }

    fn set_fill(&mut self, color: &str) {
        self.ops.push(Op::Fill(color.to_owned()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) -> Result<(), SurfaceError> {
        let circles = self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count();
        if self.fail_after == Some(circles) {
            return Err(SurfaceError::Canvas("IndexSizeError".to_owned()));
        }
        self.ops.push(Op::Circle { x, y, radius, alpha });
        Ok(())
    }

    fn reset_alpha(&mut self) {
        self.ops.push(Op::ResetAlpha);
    }
}

fn field(width: f64, height: f64) -> Starfield {
    let mut field = Starfield::new();
    field.regenerate(Viewport::new(width, height), &StarfieldConfig::default(), &mut SmallRng::seed_from_u64(11));
    field
}

#[test]
fn frame_clears_then_draws_every_star() {
    let field = field(1000.0, 500.0);
    let mut painter = Recorder::default();
    draw_frame(&mut painter, &field, "rgba(1, 2, 3, 0.5)").expect("frame should draw");

    assert_eq!(painter.ops.first(), Some(&Op::Clear(Viewport::new(1000.0, 500.0))));
    assert_eq!(painter.ops.get(1), Some(&Op::Fill("rgba(1, 2, 3, 0.5)".to_owned())));
    assert_eq!(painter.ops.last(), Some(&Op::ResetAlpha));
    assert_eq!(painter.ops.len(), field.len() + 3);
}

#[test]
fn circles_use_star_position_size_and_opacity() {
    let field = field(1000.0, 500.0);
    let mut painter = Recorder::default();
    draw_frame(&mut painter, &field, "white").expect("frame should draw");

    let circles = painter
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Circle { x, y, radius, alpha } => Some((*x, *y, *radius, *alpha)),
            _ => None,
        })
        .collect::<Vec<_>>();
    for (star, circle) in field.particles().iter().zip(&circles) {
        assert_eq!((star.x, star.y, star.radius, star.alpha), *circle);
    }
}

#[test]
fn empty_field_still_clears() {
    let field = Starfield::new();
    let mut painter = Recorder::default();
    draw_frame(&mut painter, &field, "white").expect("frame should draw");
    assert_eq!(painter.ops.len(), 3);
}

#[test]
fn failing_surface_call_aborts_frame() {
    let field = field(1000.0, 500.0);
    let mut painter = Recorder { fail_after: Some(3), ..Recorder::default() };
    let err = draw_frame(&mut painter, &field, "white").expect_err("frame should fail");
    assert_eq!(err, SurfaceError::Canvas("IndexSizeError".to_owned()));
    assert!(!painter.ops.contains(&Op::ResetAlpha));
}
