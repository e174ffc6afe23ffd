//! Perturbations applied to the current field before each step.

use crate::config::{
    POINTER_INCREMENT, SOURCE_AMPLITUDE, SOURCE_COLUMN, SOURCE_PERIOD_DIVISOR,
};
use crate::simulation::grid::{Grid, HeightField};

/// External input, applied between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Pointer position in display pixels
    PointerMoved { x: f64, y: f64 },
    PointerPressed(bool),
    SeparationIncrease,
    SeparationDecrease,
    /// Return all three fields to rest
    Reset,
}

/// Live interaction state, mutated once per frame by the loop
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    /// Cell under the pointer, `None` when it is outside the grid
    pub pointer_cell: Option<(usize, usize)>,
    pub pointer_pressed: bool,
    /// Half-distance between the two emitters, kept in `[0, ny/2)`
    pub source_separation: usize,
    /// Step counter
    pub t: u64,
}

impl InteractionState {
    pub fn new(grid: &Grid, source_separation: usize) -> Self {
        let max = max_separation(grid);
        if source_separation > max {
            log::warn!(
                "Source separation {} does not fit a {}-cell column, clamping to {}",
                source_separation,
                grid.ny,
                max
            );
        }
        Self {
            pointer_cell: None,
            pointer_pressed: false,
            source_separation: source_separation.min(max),
            t: 0,
        }
    }

    pub fn increase_separation(&mut self, grid: &Grid) {
        let max = max_separation(grid);
        if self.source_separation < max {
            self.source_separation += 1;
        }
        log::debug!("Source separation: {}", self.source_separation);
    }

    pub fn decrease_separation(&mut self) {
        self.source_separation = self.source_separation.saturating_sub(1);
        log::debug!("Source separation: {}", self.source_separation);
    }
}

/// Largest separation keeping both emitters inside the grid
fn max_separation(grid: &Grid) -> usize {
    (grid.ny / 2).saturating_sub(1)
}

/// Map a display pixel to the grid cell containing it.
///
/// The scale per axis is `display / n`; positions outside the display map
/// to `None`.
pub fn pointer_to_cell(px: f64, py: f64, display: (u32, u32), grid: &Grid) -> Option<(usize, usize)> {
    if !(px >= 0.0 && py >= 0.0) || display.0 == 0 || display.1 == 0 {
        return None;
    }
    let scale_x = display.0 as f64 / grid.nx as f64;
    let scale_y = display.1 as f64 / grid.ny as f64;
    let x = (px / scale_x) as usize;
    let y = (py / scale_y) as usize;
    grid.contains(x, y).then_some((x, y))
}

/// Height added by each emitter at step `t`
pub fn source_height(t: u64) -> f64 {
    SOURCE_AMPLITUDE * (t as f64 / SOURCE_PERIOD_DIVISOR).sin()
}

/// Add both emitters and, when pressed, the pointer increment to `field`.
///
/// Cells outside the grid are skipped.
pub fn inject(field: &mut HeightField, state: &InteractionState) {
    inject_sources(field, state);
    inject_pointer(field, state);
}

fn inject_sources(field: &mut HeightField, state: &InteractionState) {
    let center = field.ny() / 2;
    let height = source_height(state.t);
    let rows = [
        center.checked_sub(state.source_separation),
        center.checked_add(state.source_separation),
    ];
    for y in rows.into_iter().flatten() {
        if let Some(cell) = field.get_mut(SOURCE_COLUMN, y) {
            *cell += height;
        }
    }
}

fn inject_pointer(field: &mut HeightField, state: &InteractionState) {
    if !state.pointer_pressed {
        return;
    }
    if let Some((x, y)) = state.pointer_cell {
        if let Some(cell) = field.get_mut(x, y) {
            *cell += POINTER_INCREMENT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Grid {
        Grid {
            nx: n,
            ny: n,
            dx: 0.1,
            dy: 0.1,
        }
    }

    #[test]
    fn test_pointer_mapping_truncates() {
        let g = grid(90);
        assert_eq!(pointer_to_cell(0.0, 0.0, (450, 450), &g), Some((0, 0)));
        assert_eq!(pointer_to_cell(54.9, 50.0, (450, 450), &g), Some((10, 10)));
        assert_eq!(pointer_to_cell(449.9, 449.9, (450, 450), &g), Some((89, 89)));
    }

    #[test]
    fn test_pointer_mapping_rejects_outside() {
        let g = grid(90);
        assert_eq!(pointer_to_cell(450.0, 10.0, (450, 450), &g), None);
        assert_eq!(pointer_to_cell(-1.0, 10.0, (450, 450), &g), None);
        assert_eq!(pointer_to_cell(f64::NAN, 10.0, (450, 450), &g), None);
        assert_eq!(pointer_to_cell(10.0, 10.0, (0, 450), &g), None);
    }

    #[test]
    fn test_pointer_mapping_follows_window_size() {
        let g = grid(90);
        // window doubled in width
        assert_eq!(pointer_to_cell(105.0, 50.0, (900, 450), &g), Some((10, 10)));
    }

    #[test]
    fn test_pointer_injection_touches_one_cell() {
        let g = grid(90);
        let mut field = HeightField::zeros(90, 90);
        let mut state = InteractionState::new(&g, 15);
        state.t = 0; // emitters contribute sin(0) = 0
        state.pointer_pressed = true;
        state.pointer_cell = pointer_to_cell(52.0, 52.0, (450, 450), &g);

        inject(&mut field, &state);

        assert_eq!(field[(10, 10)], 0.4);
        let touched = field.as_slice().iter().filter(|h| **h != 0.0).count();
        assert_eq!(touched, 1);
    }

    #[test]
    fn test_released_pointer_injects_nothing() {
        let g = grid(90);
        let mut field = HeightField::zeros(90, 90);
        let mut state = InteractionState::new(&g, 15);
        state.pointer_cell = Some((10, 10));

        inject(&mut field, &state);

        assert_eq!(field.energy(), 0.0);
    }

    #[test]
    fn test_sources_are_symmetric() {
        let g = grid(90);
        let mut field = HeightField::zeros(90, 90);
        let mut state = InteractionState::new(&g, 15);
        state.t = 7;

        inject(&mut field, &state);

        let expected = 0.4 * (7.0f64 / 5.0).sin();
        assert!((field[(20, 30)] - expected).abs() < 1e-12);
        assert!((field[(20, 60)] - expected).abs() < 1e-12);
        assert!((field.energy() - 2.0 * expected * expected).abs() < 1e-12);
    }

    #[test]
    fn test_sources_skip_when_column_is_outside_grid() {
        let g = grid(10);
        let mut field = HeightField::zeros(10, 10);
        let mut state = InteractionState::new(&g, 2);
        state.t = 3;

        inject(&mut field, &state);

        assert_eq!(field.energy(), 0.0);
    }

    #[test]
    fn test_separation_is_clamped() {
        let g = grid(10);
        let mut state = InteractionState::new(&g, 40);
        assert_eq!(state.source_separation, 4);

        state.increase_separation(&g);
        assert_eq!(state.source_separation, 4);

        for _ in 0..10 {
            state.decrease_separation();
        }
        assert_eq!(state.source_separation, 0);

        state.increase_separation(&g);
        assert_eq!(state.source_separation, 1);
    }
}
