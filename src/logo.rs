//! Run-length splash logos
//!
//! A logo file is a list of decimal run lengths, one per line. Runs alternate
//! between lit and dark pixels, starting lit, and fill the panel row by row
//! from the top-left corner.

use alloc::vec::Vec;

use crate::error::LogoError;
use crate::framebuffer::FrameBuffer;

/// Gray level of lit logo pixels
pub const ON_INTENSITY: u8 = 7;

/// Parsed run-length logo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Logo {
    runs: Vec<u32>,
}

impl Logo {
    /// Parse logo text
    ///
    /// Blank lines count as a zero-length run, which still flips the
    /// intensity.
    ///
    /// # Errors
    ///
    /// Returns `LogoError::InvalidRun` with the 1-based line number of the
    /// first line that is not a decimal number.
    pub fn parse(text: &str) -> Result<Self, LogoError> {
        let runs = text
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let line = line.trim();
                if line.is_empty() {
                    return Ok(0);
                }
                line.parse::<u32>()
                    .map_err(|_| LogoError::InvalidRun { line: index + 1 })
            })
            .collect::<Result<Vec<u32>, LogoError>>()?;
        Ok(Self { runs })
    }

    /// Read and parse a logo file
    ///
    /// # Errors
    ///
    /// Returns `LogoError::Io` if the file cannot be read, or
    /// `LogoError::InvalidRun` if it is malformed.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LogoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).inspect_err(|e| {
            log::error!("error reading logo file {}: {e}", path.display());
        })?;
        Self::parse(&text)
    }

    /// Run lengths in file order
    pub fn runs(&self) -> &[u32] {
        &self.runs
    }

    /// Paint the logo into a framebuffer
    ///
    /// Pixels past the last run keep their previous value; runs past the end
    /// of the panel are cut off.
    pub fn paint(&self, fb: &mut FrameBuffer) {
        let width = fb.width();
        let total = width as u64 * fb.height() as u64;
        let mut index: u64 = 0;
        let mut lit = true;

        for &run in &self.runs {
            let gray = if lit { ON_INTENSITY } else { 0 };
            let end = (index + u64::from(run)).min(total);
            while index < end {
                let x = (index % width as u64) as i32;
                let y = (index / width as u64) as i32;
                fb.set_pixel(x, y, gray);
                index += 1;
            }
            if index >= total {
                break;
            }
            lit = !lit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;

    fn fb() -> FrameBuffer {
        FrameBuffer::new(Dimensions::new(8, 2).unwrap())
    }

    #[test]
    fn test_parse_runs() {
        let logo = Logo::parse("3\n\n 5 \r\n2").unwrap();
        assert_eq!(logo.runs(), &[3, 0, 5, 2]);
    }

    #[test]
    fn test_invalid_line_reported() {
        assert!(matches!(
            Logo::parse("3\n4\nx7\n"),
            Err(LogoError::InvalidRun { line: 3 })
        ));
        assert!(matches!(
            Logo::parse("-1"),
            Err(LogoError::InvalidRun { line: 1 })
        ));
    }

    #[test]
    fn test_paint_alternates_starting_lit() {
        let mut fb = fb();
        Logo::parse("3\n2\n4").unwrap().paint(&mut fb);
        let row0: alloc::vec::Vec<u8> = (0..8).map(|x| fb.pixel(x, 0).unwrap()).collect();
        assert_eq!(row0, [7, 7, 7, 0, 0, 7, 7, 7]);
        assert_eq!(fb.pixel(0, 1), Some(7));
        assert_eq!(fb.pixel(1, 1), Some(0));
    }

    #[test]
    fn test_zero_run_flips_intensity() {
        let mut fb = fb();
        Logo::parse("0\n2").unwrap().paint(&mut fb);
        assert_eq!(fb.pixel(0, 0), Some(0));
        assert_eq!(fb.pixel(1, 0), Some(0));
    }

    #[test]
    fn test_paint_stops_at_end_of_panel() {
        let mut fb = fb();
        fb.fill(0x3);
        Logo::parse("100\n100").unwrap().paint(&mut fb);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x77));
    }

    #[test]
    fn test_short_logo_leaves_rest_untouched() {
        let mut fb = fb();
        fb.fill(0x3);
        Logo::parse("2").unwrap().paint(&mut fb);
        assert_eq!(fb.pixel(1, 0), Some(7));
        assert_eq!(fb.pixel(2, 0), Some(3));
    }
}
