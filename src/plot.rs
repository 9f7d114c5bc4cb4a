//! Raster rendering of riddles as a grid of subplot panels.
//!
//! A [`Figure`] is an owned RGBA buffer plus the rectangles of its populated
//! panels; callers decide whether to save or further annotate it.

use image::{Rgba, RgbaImage};

use crate::palette::COLORMAP_RGB;
use crate::riddle::Riddle;

/// Side length of one grid cell, in pixels.
pub const CELL_PX: u32 = 16;

/// Margin around and between panels, in pixels.
pub const PANEL_GAP_PX: u32 = 8;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    Input,
    Output,
}

/// Placement of one drawn board within the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// Index into the riddle's pairs, train first then test.
    pub pair_index: usize,
    pub slot: PanelSlot,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct Figure {
    pub image: RgbaImage,
    pub panels: Vec<Panel>,
}

impl Riddle {
    /// Builds a figure with one row per pair (train then test) and two panel
    /// columns, input and output. Test output panels are omitted entirely
    /// when `with_test_outputs` is false.
    pub fn render_plot(&self, with_test_outputs: bool) -> Figure {
        let parts: Vec<(Vec<Vec<i64>>, Option<Vec<Vec<i64>>>)> = self
            .train
            .iter()
            .map(|pair| pair.as_i64(true))
            .chain(self.test.iter().map(|pair| pair.as_i64(with_test_outputs)))
            .collect();

        let in_cols = parts.iter().map(|(i, _)| i[0].len()).max().unwrap_or(0) as u32;
        let out_cols = parts
            .iter()
            .filter_map(|(_, o)| o.as_ref())
            .map(|o| o[0].len())
            .max()
            .unwrap_or(0) as u32;
        let row_heights: Vec<u32> = parts
            .iter()
            .map(|(i, o)| i.len().max(o.as_ref().map_or(0, Vec::len)) as u32)
            .collect();

        let width = PANEL_GAP_PX * 3 + (in_cols + out_cols) * CELL_PX;
        let height =
            PANEL_GAP_PX + row_heights.iter().map(|h| h * CELL_PX + PANEL_GAP_PX).sum::<u32>();
        let mut image = RgbaImage::from_pixel(width.max(1), height.max(1), BACKGROUND);

        let mut panels = Vec::new();
        let mut y = PANEL_GAP_PX;
        for (pair_index, (input, output)) in parts.iter().enumerate() {
            let x = PANEL_GAP_PX;
            draw_board(&mut image, input, x, y);
            panels.push(Panel {
                pair_index,
                slot: PanelSlot::Input,
                x,
                y,
                width: input[0].len() as u32 * CELL_PX,
                height: input.len() as u32 * CELL_PX,
            });
            if let Some(output) = output {
                let x = PANEL_GAP_PX * 2 + in_cols * CELL_PX;
                draw_board(&mut image, output, x, y);
                panels.push(Panel {
                    pair_index,
                    slot: PanelSlot::Output,
                    x,
                    y,
                    width: output[0].len() as u32 * CELL_PX,
                    height: output.len() as u32 * CELL_PX,
                });
            }
            y += row_heights[pair_index] * CELL_PX + PANEL_GAP_PX;
        }

        Figure { image, panels }
    }
}

fn draw_board(image: &mut RgbaImage, board: &[Vec<i64>], x0: u32, y0: u32) {
    for (row, cells) in board.iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            let [r, g, b] = COLORMAP_RGB[value as usize];
            let pixel = Rgba([r, g, b, 255]);
            for dy in 0..CELL_PX {
                for dx in 0..CELL_PX {
                    image.put_pixel(
                        x0 + col as u32 * CELL_PX + dx,
                        y0 + row as u32 * CELL_PX + dy,
                        pixel,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::riddle::BoardPair;

    fn pair(input: Vec<Vec<u8>>, output: Vec<Vec<u8>>) -> BoardPair {
        BoardPair::new(Board::new(input).unwrap(), Board::new(output).unwrap())
    }

    fn riddle() -> Riddle {
        Riddle::new(
            vec![pair(vec![vec![0]], vec![vec![1]])],
            vec![pair(vec![vec![2]], vec![vec![3]])],
            Some("p1".into()),
        )
    }

    #[test]
    fn every_pair_gets_two_panels_with_outputs() {
        let figure = riddle().render_plot(true);
        assert_eq!(figure.panels.len(), 4);
    }

    #[test]
    fn test_output_panel_is_omitted_without_outputs() {
        let figure = riddle().render_plot(false);
        assert_eq!(figure.panels.len(), 3);
        let test_panels: Vec<_> = figure
            .panels
            .iter()
            .filter(|p| p.pair_index == 1)
            .collect();
        assert_eq!(test_panels.len(), 1);
        assert_eq!(test_panels[0].slot, PanelSlot::Input);
    }

    #[test]
    fn figure_dimensions_follow_the_layout_constants() {
        let figure = riddle().render_plot(true);
        assert_eq!(figure.image.width(), PANEL_GAP_PX * 3 + 2 * CELL_PX);
        assert_eq!(
            figure.image.height(),
            PANEL_GAP_PX + 2 * (CELL_PX + PANEL_GAP_PX)
        );
    }

    #[test]
    fn panels_are_filled_with_palette_colors() {
        let figure = riddle().render_plot(true);
        let input = &figure.panels[0];
        let [r, g, b] = COLORMAP_RGB[0];
        assert_eq!(*figure.image.get_pixel(input.x, input.y), Rgba([r, g, b, 255]));
        let output = &figure.panels[1];
        let [r, g, b] = COLORMAP_RGB[1];
        assert_eq!(
            *figure.image.get_pixel(output.x, output.y),
            Rgba([r, g, b, 255])
        );
    }

    #[test]
    fn taller_output_sets_the_row_height() {
        let riddle = Riddle::new(
            vec![pair(vec![vec![0]], vec![vec![1, 2], vec![3, 4]])],
            vec![pair(vec![vec![2]], vec![vec![3]])],
            None,
        );
        let figure = riddle.render_plot(false);
        // first figure row is two cells tall, second is one
        assert_eq!(
            figure.image.height(),
            PANEL_GAP_PX + (2 * CELL_PX + PANEL_GAP_PX) + (CELL_PX + PANEL_GAP_PX)
        );
    }
}
