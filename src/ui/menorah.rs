// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing of the nine-branched lamp and its candles.
//!
//! The drawing is laid out in a fixed scene (see
//! [`design_tokens::menorah`](crate::ui::design_tokens::menorah)) and scaled
//! uniformly to fit the widget bounds, centered on both axes.

use crate::domain::menorah::{bounds, CandleColor, Slot, SlotIndex};
use crate::ui::design_tokens::{menorah as scene, palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Uniform scale plus centering offset from scene units to widget pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl SceneTransform {
    /// Fits the scene into `size`, preserving its aspect ratio.
    #[must_use]
    pub fn fit(size: Size) -> Self {
        let scale = (size.width / scene::SCENE_WIDTH)
            .min(size.height / scene::SCENE_HEIGHT)
            .max(0.0);
        Self {
            scale,
            offset_x: (size.width - scene::SCENE_WIDTH * scale) / 2.0,
            offset_y: (size.height - scene::SCENE_HEIGHT * scale) / 2.0,
        }
    }

    #[must_use]
    pub fn point(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.offset_x + (x - scene::SCENE_LEFT) * self.scale,
            self.offset_y + (y - scene::SCENE_TOP) * self.scale,
        )
    }

    #[must_use]
    pub fn length(&self, value: f32) -> f32 {
        value * self.scale
    }
}

/// Horizontal scene position of a slot's center.
#[must_use]
pub fn slot_x(index: SlotIndex) -> f32 {
    f32::from(index.offset_from_center()) * scene::SLOT_SPACING
}

/// Scene y of the top of the candle standing in `index`.
#[must_use]
pub fn candle_top(index: SlotIndex) -> f32 {
    let lift = if index.is_lighter() {
        scene::LIGHTER_LIFT
    } else {
        0.0
    };
    scene::RIM_Y + scene::CANDLE_SINK - scene::CANDLE_HEIGHT - lift
}

fn to_color(color: CandleColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// Canvas program rendering one snapshot of the slots.
pub struct Menorah {
    cache: Cache,
    slots: [Slot; bounds::SLOT_COUNT],
}

impl Menorah {
    #[must_use]
    pub fn new(slots: [Slot; bounds::SLOT_COUNT]) -> Self {
        Self {
            cache: Cache::default(),
            slots,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MENORAH_HEIGHT))
            .into()
    }

    fn draw_lamp(&self, frame: &mut Frame, t: &SceneTransform) {
        let base = Path::new(|b| {
            b.move_to(t.point(-40.0, 100.0));
            b.line_to(t.point(40.0, 100.0));
            b.line_to(t.point(30.0, 50.0));
            b.line_to(t.point(-30.0, 50.0));
            b.close();
        });
        frame.fill(&base, palette::GOLD_700);

        let stem = Path::rectangle(
            t.point(-10.0, -20.0),
            Size::new(t.length(20.0), t.length(70.0)),
        );
        frame.fill(&stem, palette::GOLD_500);

        let branch_stroke = Stroke::default()
            .with_width(t.length(scene::BRANCH_WIDTH))
            .with_color(palette::GOLD_500)
            .with_line_cap(canvas::LineCap::Round);

        for index in SlotIndex::ALL.into_iter().filter(|i| !i.is_lighter()) {
            let x = slot_x(index);
            let branch = Path::new(|b| {
                b.move_to(t.point(0.0, scene::RIM_Y));
                b.quadratic_curve_to(
                    t.point(x / 2.0, scene::BRANCH_DIP),
                    t.point(x, scene::RIM_Y),
                );
            });
            frame.stroke(&branch, branch_stroke);
        }
    }

    fn draw_candle(frame: &mut Frame, t: &SceneTransform, slot: &Slot) {
        let x = slot_x(slot.index);
        let top = candle_top(slot.index);
        let half_width = scene::CANDLE_WIDTH / 2.0;

        let body = Path::rectangle(
            t.point(x - half_width, top),
            Size::new(
                t.length(scene::CANDLE_WIDTH),
                t.length(scene::RIM_Y + scene::CANDLE_SINK - top),
            ),
        );
        frame.fill(&body, to_color(slot.color));
        frame.stroke(
            &body,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgba(0.0, 0.0, 0.0, 0.2)),
        );

        let wick_top = top - scene::WICK_LENGTH;
        let wick = Path::line(t.point(x, top), t.point(x, wick_top));
        frame.stroke(
            &wick,
            Stroke::default()
                .with_width(t.length(2.0))
                .with_color(palette::WICK),
        );

        if slot.lit {
            let glow = Path::circle(t.point(x, top - 10.0), t.length(scene::GLOW_RADIUS));
            frame.fill(&glow, palette::FLAME_GLOW);

            frame.fill(
                &teardrop(t, x, wick_top, 4.0, scene::FLAME_HEIGHT),
                palette::FLAME,
            );
            frame.fill(
                &teardrop(t, x, wick_top, 2.0, scene::FLAME_HEIGHT * 2.0 / 3.0),
                palette::FLAME_CORE,
            );
        }
    }

    fn draw_cup(frame: &mut Frame, t: &SceneTransform, index: SlotIndex) {
        let x = slot_x(index);
        let cup = Path::new(|b| {
            b.move_to(t.point(x - 10.0, scene::RIM_Y));
            b.line_to(t.point(x + 10.0, scene::RIM_Y));
            b.line_to(t.point(x + 8.0, scene::RIM_Y + 15.0));
            b.line_to(t.point(x - 8.0, scene::RIM_Y + 15.0));
            b.close();
        });
        frame.fill(&cup, palette::GOLD_300);
    }
}

/// Flame outline: two quadratic curves meeting at the tip.
fn teardrop(t: &SceneTransform, x: f32, base_y: f32, half_width: f32, height: f32) -> Path {
    let belly_y = base_y - height * 0.5;
    let tip_y = base_y - height;
    Path::new(|b| {
        b.move_to(t.point(x, base_y));
        b.quadratic_curve_to(t.point(x - half_width, belly_y), t.point(x, tip_y));
        b.quadratic_curve_to(t.point(x + half_width, belly_y), t.point(x, base_y));
        b.close();
    })
}

impl<Message> canvas::Program<Message> for Menorah {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let transform = SceneTransform::fit(frame.size());

                self.draw_lamp(frame, &transform);
                for slot in self.slots.iter().filter(|slot| slot.occupied) {
                    Self::draw_candle(frame, &transform, slot);
                }
                // Cups cover the candle feet.
                for index in SlotIndex::ALL {
                    Self::draw_cup(frame, &transform, index);
                }
            });

        vec![geometry]
    }
}
