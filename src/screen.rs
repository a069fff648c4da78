//! src/screen.rs
//! -------------
//! Pixel sinks the renderer draws into, and the ways a finished frame is
//! presented: PNG files and a truecolor terminal.

use crate::color::Rgb;
use image::{imageops, Rgb as ImageRgb, RgbImage};
use rand::Rng;
use std::io::{self, BufWriter, Write};

/// Destination for one frame of pixels.
pub trait PixelSink {
    /// Out-of-range coordinates are ignored.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb);
    /// The frame is complete; publish it.
    fn full_refresh(&mut self);
}

/// Double-buffered frame. Drawing goes to the working buffer; `full_refresh`
/// copies it to the presented one and counts what changed.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    working: Vec<Rgb>,
    presented: Vec<Rgb>,
    changed: usize,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            working: vec![Rgb::BLACK; len],
            presented: vec![Rgb::BLACK; len],
            changed: 0,
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_range = x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height;
        in_range.then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn clear(&mut self, color: Rgb) {
        self.working.fill(color);
    }

    /// Presented color at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.presented[i])
    }

    pub fn presented(&self) -> &[Rgb] {
        &self.presented
    }

    /// Pixels that differed from the previous frame at the last refresh.
    pub fn changed(&self) -> usize {
        self.changed
    }

    /// Presented frame as an image, each pixel blown up to `upscale`² pixels.
    pub fn to_image(&self, upscale: u32) -> RgbImage {
        let img = RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = y as usize * self.width as usize + x as usize;
            ImageRgb(self.presented[i].channels())
        });
        let upscale = upscale.max(1);
        if upscale == 1 {
            return img;
        }
        imageops::resize(
            &img,
            self.width * upscale,
            self.height * upscale,
            imageops::FilterType::Nearest,
        )
    }
}

impl PixelSink for FrameBuffer {
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.working[i] = color;
        }
    }

    fn full_refresh(&mut self) {
        self.changed = self
            .working
            .iter()
            .zip(&self.presented)
            .filter(|(new, old)| new != old)
            .count();
        self.presented.copy_from_slice(&self.working);
    }
}

/// Draws frames in a truecolor terminal, two pixel rows per text line using
/// the upper half block: foreground is the top pixel, background the bottom.
pub struct AnsiTerminal<W: Write> {
    out: BufWriter<W>,
}

impl AnsiTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out) }
    }

    pub fn present(&mut self, fb: &FrameBuffer, status: &str) -> io::Result<()> {
        // home cursor, hide it while drawing
        write!(self.out, "\x1b[H\x1b[?25l")?;
        for row in (0..fb.height() as i32).step_by(2) {
            for x in 0..fb.width() as i32 {
                let [tr, tg, tb] = fb.pixel(x, row).unwrap_or_default().channels();
                let [br, bg, bb] = fb.pixel(x, row + 1).unwrap_or_default().channels();
                write!(self.out, "\x1b[38;2;{tr};{tg};{tb}m\x1b[48;2;{br};{bg};{bb}m\u{2580}")?;
            }
            writeln!(self.out, "\x1b[0m")?;
        }
        write!(self.out, "\x1b[K{status}\x1b[?25h")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

/// Fresh output directory name for a run, e.g. `renders/run_48x40_f36_a1B2c3`.
pub fn render_dir_name(w: u32, h: u32, frames: u32) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("renders/run_{w}x{h}_f{frames}_{suf}")
}
