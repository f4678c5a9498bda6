#![forbid(unsafe_code)]

//! Flex layout: split a rectangle along one axis by constraints.

use crate::geometry::{Rect, Sides};

/// Size request for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Exactly this many cells.
    Fixed(u16),
    /// Share of the available size (0.0 to 100.0).
    Percentage(f32),
    /// At least this many cells, then an equal share of what is left.
    Min(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// A one-axis layout.
#[derive(Debug, Clone, Default)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Sides,
    gap: u16,
}

impl Flex {
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// One rectangle per constraint, in order.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        let count = self.constraints.len();
        if count == 0 {
            return Vec::new();
        }
        if inner.is_empty() {
            return vec![Rect::default(); count];
        }

        let total = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };
        let gaps = self.gap.saturating_mul((count - 1) as u16);
        let sizes = self.solve(total.saturating_sub(gaps));

        let mut pos = match self.direction {
            Direction::Horizontal => inner.x,
            Direction::Vertical => inner.y,
        };
        sizes
            .into_iter()
            .map(|size| {
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(pos, inner.y, size, inner.height),
                    Direction::Vertical => Rect::new(inner.x, pos, inner.width, size),
                };
                pos = pos.saturating_add(size).saturating_add(self.gap);
                rect
            })
            .collect()
    }

    fn solve(&self, available: u16) -> Vec<u16> {
        let mut sizes = vec![0u16; self.constraints.len()];
        let mut remaining = available;
        let mut growers = Vec::new();

        for (i, constraint) in self.constraints.iter().enumerate() {
            let want = match *constraint {
                Constraint::Fixed(n) => n,
                Constraint::Percentage(p) => (f32::from(available) * p / 100.0).round() as u16,
                Constraint::Min(n) => {
                    growers.push(i);
                    n
                }
            };
            sizes[i] = want.min(remaining);
            remaining -= sizes[i];
        }

        // Leftover goes to Min slots; the last one absorbs rounding.
        if remaining > 0 && !growers.is_empty() {
            let share = remaining / growers.len() as u16;
            let last = growers.len() - 1;
            for (n, &i) in growers.iter().enumerate() {
                let extra = if n == last {
                    remaining - share * last as u16
                } else {
                    share
                };
                sizes[i] += extra;
            }
        }

        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_then_min_fills() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(3), Constraint::Min(1), Constraint::Fixed(1)])
            .split(Rect::new(0, 0, 40, 20));
        assert_eq!(rects[0], Rect::new(0, 0, 40, 3));
        assert_eq!(rects[1], Rect::new(0, 3, 40, 16));
        assert_eq!(rects[2], Rect::new(0, 19, 40, 1));
    }

    #[test]
    fn percentage_halves_with_gap() {
        let rects = Flex::horizontal()
            .gap(2)
            .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
            .split(Rect::new(0, 0, 42, 5));
        assert_eq!(rects[0], Rect::new(0, 0, 20, 5));
        assert_eq!(rects[1], Rect::new(22, 0, 20, 5));
    }

    #[test]
    fn min_slots_share_leftover() {
        let rects = Flex::horizontal()
            .constraints([Constraint::Min(0), Constraint::Min(0), Constraint::Min(0)])
            .split(Rect::new(0, 0, 10, 1));
        let widths: Vec<_> = rects.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![3, 3, 4]);
    }

    #[test]
    fn overfull_fixed_is_truncated() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(8), Constraint::Fixed(8)])
            .split(Rect::new(0, 0, 5, 10));
        assert_eq!(rects[0].height, 8);
        assert_eq!(rects[1].height, 2);
    }

    #[test]
    fn empty_area_yields_empty_rects() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Min(1)])
            .split(Rect::default());
        assert_eq!(rects, vec![Rect::default(); 2]);
    }
}
