//! The hover-highlight demo: a row of grey squares, each revealing its
//! assigned color while the pointer is over it.

use svg::Document;
use svg::node::element::Rectangle;

use crate::chart::Chart;

const SQUARE_SIZE: f64 = 100.0;
const SQUARE_STEP: f64 = 110.0;
const RESTING_FILL: &str = "lightgrey";
const COLORS: [&str; 4] = ["blue", "green", "teal", "orange"];

/// The hover demo and its two-state pointer interaction: a square is
/// either hovered or resting, nothing else is tracked.
#[derive(Debug, Default)]
pub struct HoverDemo {
    hovered: Option<usize>,
}

impl HoverDemo {
    pub fn new() -> HoverDemo {
        Self { hovered: None }
    }

    /// The pointer entered the square at `index`. Out-of-range indices
    /// are ignored.
    pub fn pointer_enter(&mut self, index: usize) {
        if index < COLORS.len() {
            self.hovered = Some(index);
        }
    }

    /// The pointer left the squares; every fill resets.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// The current fill of every square, in order.
    pub fn fills(&self) -> Vec<&'static str> {
        COLORS
            .iter()
            .enumerate()
            .map(|(index, color)| {
                if self.hovered == Some(index) {
                    *color
                } else {
                    RESTING_FILL
                }
            })
            .collect()
    }
}

impl Chart for HoverDemo {
    fn title(&self) -> &str {
        "Hover highlight"
    }

    fn render(&self) -> Document {
        let width = SQUARE_STEP * (COLORS.len() - 1) as f64 + SQUARE_SIZE;
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, width, SQUARE_SIZE))
            .set("width", width)
            .set("height", SQUARE_SIZE);

        for (index, fill) in self.fills().into_iter().enumerate() {
            let square = Rectangle::new()
                .set("class", "hover-square")
                .set("x", SQUARE_STEP * index as f64)
                .set("width", SQUARE_SIZE)
                .set("height", SQUARE_SIZE)
                .set("fill", fill)
                .set("data-color", COLORS[index]);

            document = document.add(square);
        }

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_rest_grey() {
        let demo = HoverDemo::new();

        assert_eq!(demo.fills(), vec!["lightgrey"; 4]);
    }

    #[test]
    fn entering_a_square_reveals_its_color() {
        for (index, color) in COLORS.iter().enumerate() {
            let mut demo = HoverDemo::new();

            demo.pointer_enter(index);

            let fills = demo.fills();
            assert_eq!(fills[index], *color);

            for (other, fill) in fills.iter().enumerate() {
                if other != index {
                    assert_eq!(*fill, RESTING_FILL);
                }
            }
        }
    }

    #[test]
    fn leaving_resets_the_fill() {
        let mut demo = HoverDemo::new();

        demo.pointer_enter(2);
        demo.pointer_leave();

        assert_eq!(demo.fills(), vec!["lightgrey"; 4]);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut demo = HoverDemo::new();

        demo.pointer_enter(7);

        assert_eq!(demo.fills(), vec!["lightgrey"; 4]);
    }

    #[test]
    fn render_carries_the_assigned_colors() {
        let mut demo = HoverDemo::new();
        demo.pointer_enter(1);

        let rendered = demo.render().to_string();

        assert!(rendered.contains("fill=\"green\""));
        assert!(rendered.contains("data-color=\"orange\""));
    }
}
