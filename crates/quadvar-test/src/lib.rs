//! quadvar-test - Regression test framework for quadvar
//!
//! Regression tests record many small checks against one [`RegParams`],
//! keep going after a failed check, and report every failure at the end:
//!
//! ```
//! use quadvar_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

/// Build a luma buffer of `width` x `height` samples from a generator
pub fn luma_image(width: u32, height: u32, f: impl Fn(u32, u32) -> u32) -> Vec<u32> {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    data
}

/// Build a packed-RGB buffer of `width` x `height` pixels from a generator
pub fn rgb_image(width: u32, height: u32, f: impl Fn(u32, u32) -> (u8, u8, u8)) -> Vec<u32> {
    luma_image(width, height, |x, y| {
        let (r, g, b) = f(x, y);
        quadvar_core::color::compose_rgb(r, g, b)
    })
}
