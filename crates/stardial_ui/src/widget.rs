//! The star row widget.
//!
//! Owns a snapshot of the host's rating state, hit-tests pointer input onto
//! star positions, routes completed clicks through the interaction policy,
//! and emits glyph render commands. Every state change is returned in the
//! [`RowResponse`] so the host can persist it; the widget is never the
//! source of truth.

use stardial_core::{activate_star, icon_sequence, set_max_rating, IconState, RatingResult, RatingState};
use stardial_schema::{BlockAttributes, Justification, SizeMetrics};
use tracing::trace;

use crate::input::{PointerButton, PointerState};
use crate::layout::{Rect, StarRowLayout};
use crate::render::{GlyphTable, RenderCommand};
use crate::style::StarStyle;

/// Presentation options for a star row.
///
/// Pass-through from the host's attribute store; nothing here feeds back
/// into the rating math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    /// Side length of one star cell, in pixels.
    pub icon_size_px: f32,
    /// Horizontal alignment of the row.
    pub justification: Justification,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            icon_size_px: 32.0,
            justification: Justification::None,
        }
    }
}

impl DisplayOptions {
    /// Derives options from validated attributes, resolving the icon size
    /// to pixels against the given metrics.
    #[must_use]
    pub fn from_attributes(attributes: &BlockAttributes, metrics: SizeMetrics) -> Self {
        Self {
            icon_size_px: attributes.icon_size.to_pixels(metrics),
            justification: attributes.justification,
        }
    }
}

/// Response from a widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowResponse {
    /// The rating changed; `state` carries the new value.
    pub changed: bool,
    /// The new rating state to persist, when `changed` is set.
    pub state: Option<RatingState>,
    /// The hovered star changed (enter, leave, or move between stars).
    pub hover_changed: bool,
}

/// A row of star affordances bound to one rating instance.
#[derive(Debug, Clone)]
pub struct StarRowWidget {
    /// Snapshot of the host's rating state.
    state: RatingState,
    /// Presentation options.
    options: DisplayOptions,
    /// Row styling.
    style: StarStyle,
    /// Host glyph mapping.
    glyphs: GlyphTable,
    /// Bounding rectangle (set after layout).
    bounds: Rect,
    /// Star position currently under the pointer.
    hovered: Option<u32>,
    /// Star position the primary button went down on.
    pressed_on: Option<u32>,
    /// Widget needs redraw.
    dirty: bool,
}

impl StarRowWidget {
    /// Creates a widget from the host's current snapshot.
    #[must_use]
    pub fn new(state: RatingState, options: DisplayOptions, glyphs: GlyphTable) -> Self {
        Self {
            state,
            options,
            style: StarStyle::default(),
            glyphs,
            bounds: Rect::ZERO,
            hovered: None,
            pressed_on: None,
            dirty: true,
        }
    }

    /// Overrides the default style.
    #[must_use]
    pub fn with_style(mut self, style: StarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the bounding rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    /// Replaces the snapshot after the host's store changed.
    pub fn set_state(&mut self, state: RatingState) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> RatingState {
        self.state
    }

    /// Returns the display options.
    #[must_use]
    pub const fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Returns the star position under the pointer, if any.
    #[must_use]
    pub const fn hovered_star(&self) -> Option<u32> {
        self.hovered
    }

    /// Returns and clears the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Applies a ceiling change from the host's settings control.
    ///
    /// The snapshot is updated on success so the next render is already
    /// consistent; the returned state is what the host persists.
    ///
    /// # Errors
    ///
    /// Propagates the ceiling validation error; the snapshot is untouched.
    pub fn apply_max_rating(&mut self, new_max: u32) -> RatingResult<RatingState> {
        let next = set_max_rating(self.state, new_max)?;
        self.set_state(next);
        Ok(next)
    }

    /// Processes one frame of pointer input.
    ///
    /// A click counts only when press and release land on the same star;
    /// dragging off a star before releasing cancels it, which is the
    /// affordance every pointer-driven control gives for a misclick.
    pub fn update(&mut self, pointer: &PointerState) -> RowResponse {
        let mut response = RowResponse::default();
        let layout = self.layout();
        let hit = layout.hit_test(pointer.x, pointer.y);

        if hit != self.hovered {
            self.hovered = hit;
            self.dirty = true;
            response.hover_changed = true;
        }

        if pointer.pressed(PointerButton::Left) {
            self.pressed_on = hit;
        }

        if pointer.released(PointerButton::Left) {
            let pressed_on = self.pressed_on.take();
            if let Some(index) = hit {
                if pressed_on == Some(index) {
                    // Hit testing only yields live positions, so the policy
                    // cannot reject the index.
                    if let Ok(next) = activate_star(self.state, index) {
                        trace!(
                            index,
                            from = self.state.rating.as_f64(),
                            to = next.rating.as_f64(),
                            "star activated"
                        );
                        self.state = next;
                        self.dirty = true;
                        response.changed = true;
                        response.state = Some(next);
                    }
                }
            }
        }

        response
    }

    /// Generates render commands for the row.
    pub fn render(&self, commands: &mut Vec<RenderCommand>) {
        let layout = self.layout();

        for (slot, icon) in icon_sequence(self.state).into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let position = slot as u32 + 1;
            let color = if self.hovered == Some(position) {
                self.style.hover
            } else if icon == IconState::Empty {
                self.style.unlit
            } else {
                self.style.lit
            };

            commands.push(RenderCommand::Glyph {
                bounds: layout.cell_rect(position),
                glyph: self.glyphs.glyph_for(icon),
                color,
            });
        }
    }

    /// Returns the current row geometry.
    fn layout(&self) -> StarRowLayout {
        StarRowLayout::new(
            self.bounds,
            self.state.max_rating,
            self.options.icon_size_px,
            self.style.gap,
            self.options.justification,
        )
    }
}
