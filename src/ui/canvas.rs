//! Half-block picture renderer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};

use crate::picture::{PictureSlot, PictureState, Raster};
use crate::transform::TransformState;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR};

/// Upper half block: foreground paints the top pixel, background the
/// bottom one, giving two vertical pixels per terminal cell.
const HALF_BLOCK: &str = "▀";

/// Body widget: the picture under the current transform, or a placeholder
/// line while it is not available.
pub struct PictureView {
    slot: PictureSlot,
    transform: TransformState,
}

impl PictureView {
    pub fn new(slot: PictureSlot, transform: TransformState) -> Self {
        Self { slot, transform }
    }
}

impl Widget for PictureView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let state = self.slot.lock();
        match &*state {
            PictureState::Loading => {
                placeholder("Fetching picture...", HEADER_TEXT).render(message_line(area), buf);
            }
            PictureState::Failed(message) => {
                placeholder(&format!("Picture unavailable: {message}"), STATUS_ERROR)
                    .render(message_line(area), buf);
            }
            PictureState::Ready(raster) => render_raster(raster, &self.transform, area, buf),
        }
    }
}

fn placeholder(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
}

/// Single row in the vertical middle of `area`.
fn message_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    }
}

/// Paint the raster rotated and faded into `area`.
///
/// The rotation consumes the transform as a fractional turn and the
/// sampling runs the inverse mapping: for every grid pixel, rotate back
/// around the raster centre and take the nearest source pixel. Grid
/// pixels outside the raster keep the untouched background cell.
fn render_raster(raster: &Raster, transform: &TransformState, area: Rect, buf: &mut Buffer) {
    let grid_w = f64::from(area.width);
    let grid_h = f64::from(area.height) * 2.0;

    // Half blocks make grid pixels square, so fit-to-box scaling keeps
    // the picture's aspect ratio.
    let scale = (grid_w / f64::from(raster.width())).min(grid_h / f64::from(raster.height()));
    if scale <= 0.0 {
        return;
    }

    let angle = transform.turns() * std::f64::consts::TAU;
    let (sin, cos) = angle.sin_cos();
    let (grid_cx, grid_cy) = (grid_w / 2.0, grid_h / 2.0);
    let src_cx = f64::from(raster.width()) / 2.0;
    let src_cy = f64::from(raster.height()) / 2.0;

    let sample = |gx: f64, gy: f64| {
        let dx = gx - grid_cx;
        let dy = gy - grid_cy;
        let sx = (dx * cos + dy * sin) / scale + src_cx;
        let sy = (-dx * sin + dy * cos) / scale + src_cy;
        raster.sample(sx, sy)
    };

    for row in 0..area.height {
        for col in 0..area.width {
            let gx = f64::from(col) + 0.5;
            let top = sample(gx, f64::from(row) * 2.0 + 0.5);
            let bottom = sample(gx, f64::from(row) * 2.0 + 1.5);
            if top.is_none() && bottom.is_none() {
                continue;
            }

            let fg = top.map_or(Color::Black, |pixel| shade(pixel, transform.alpha));
            let bg = bottom.map_or(Color::Black, |pixel| shade(pixel, transform.alpha));
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(HALF_BLOCK);
                cell.set_style(Style::default().fg(fg).bg(bg));
            }
        }
    }
}

/// Fade a pixel toward the (black) background. The pixel's own alpha
/// channel multiplies with the transform's.
fn shade(pixel: [u8; 4], alpha: f64) -> Color {
    let opacity = alpha * f64::from(pixel[3]) / 255.0;
    let channel = |value: u8| (f64::from(value) * opacity).round() as u8;
    Color::Rgb(channel(pixel[0]), channel(pixel[1]), channel(pixel[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn two_by_two() -> Raster {
        Raster::from_rgba(2, 2, vec![RED, GREEN, BLUE, WHITE])
    }

    fn upright(alpha: f64) -> TransformState {
        TransformState {
            rotation_degrees: 0.0,
            alpha,
        }
    }

    #[test]
    fn upright_raster_maps_pixels_onto_half_blocks() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        render_raster(&two_by_two(), &upright(1.0), Rect::new(0, 0, 2, 1), &mut buf);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));

        let cell = buf.cell((1, 0)).unwrap();
        assert_eq!(cell.fg, Color::Rgb(0, 255, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn half_turn_flips_the_picture() {
        let transform = TransformState {
            rotation_degrees: 180.0,
            alpha: 1.0,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        render_raster(&two_by_two(), &transform, Rect::new(0, 0, 2, 1), &mut buf);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn alpha_scales_every_channel() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        render_raster(&two_by_two(), &upright(0.0), Rect::new(0, 0, 2, 1), &mut buf);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.fg, Color::Rgb(0, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn cells_outside_the_picture_stay_background() {
        // 4x1 cells give a 4x2 pixel grid; the 2x2 raster covers only the
        // middle two columns at scale 1.
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        render_raster(&two_by_two(), &upright(1.0), Rect::new(0, 0, 4, 1), &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), HALF_BLOCK);
        assert_eq!(buf.cell((2, 0)).unwrap().symbol(), HALF_BLOCK);
        assert_eq!(buf.cell((3, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn shade_multiplies_by_the_pixel_alpha_channel() {
        assert_eq!(shade([200, 100, 50, 255], 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(shade([200, 100, 50, 255], 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(shade([200, 100, 50, 0], 1.0), Color::Rgb(0, 0, 0));
    }
}
