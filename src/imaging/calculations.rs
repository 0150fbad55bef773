//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions that fit an image within the given bounds.
///
/// The resize is driven by the longer axis: landscape images are clamped on
/// width, portrait and square images on height. The other axis is derived
/// from the original aspect ratio and truncated to an integer.
///
/// Two properties follow from the formula:
///
/// - The driving axis is never upscaled — `min` keeps the original dimension
///   when it is already within its bound.
/// - Only the driving axis is clamped. The derived axis can exceed its own
///   bound for extreme aspect ratios (a very wide, short image with a loose
///   width bound can yield a height above `max_height`). This single-axis
///   policy is deliberate and pinned by tests.
///
/// # Arguments
/// * `original` - Original image dimensions (width, height)
/// * `bounds` - Maximum dimensions (max_width, max_height), both > 0
///
/// # Examples
/// ```
/// # use imgfit::imaging::fit_dimensions;
/// // 1600x1200 into 800x600 → 800x600
/// assert_eq!(fit_dimensions((1600, 1200), (800, 600)), (800, 600));
///
/// // 600x1200 portrait into 800x600 → 300x600
/// assert_eq!(fit_dimensions((600, 1200), (800, 600)), (300, 600));
/// ```
pub fn fit_dimensions(original: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (orig_w, orig_h) = original;
    let (max_w, max_h) = bounds;

    let aspect = orig_w as f64 / orig_h as f64;

    if orig_w > orig_h {
        // Landscape: width drives the resize
        let new_w = max_w.min(orig_w);
        (new_w, (new_w as f64 / aspect) as u32)
    } else {
        // Portrait or square: height drives the resize
        let new_h = max_h.min(orig_h);
        ((new_h as f64 * aspect) as u32, new_h)
    }
}
