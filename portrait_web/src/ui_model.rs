//! DOM-free helpers that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! styling and measurement rules on the host.

use portrait::splash::Placement;

/// CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Largest finite extent, or 0. Mirrors how jQuery sizes the document: the
/// maximum of the scroll, offset and client extents of `<html>` and `<body>`.
pub fn document_extent(extents: impl IntoIterator<Item = f64>) -> f64 {
    extents
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Inline style for a splash at `placement`. `background` is the current
/// frame (see `SpriteSheet::frame_background`), absent before the first tick.
pub fn splash_style(placement: Placement, size: f64, background: Option<&str>) -> String {
    let mut style = format!(
        "position: absolute; left: {}; top: {}; width: {}; height: {};",
        px(placement.left),
        px(placement.top),
        px(size),
        px(size),
    );
    if let Some(background) = background {
        style.push_str(&format!(
            " background: {background}; background-size: 100% 100%;"
        ));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use portrait::config::SpriteSheet;

    #[test]
    fn px_drops_trailing_zero() {
        assert_eq!(px(350.0), "350px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(0.0), "0px");
    }

    #[test]
    fn document_extent_takes_largest_finite() {
        assert_eq!(document_extent([800.0, 1024.0, 1000.0]), 1024.0);
        assert_eq!(document_extent([f64::NAN, 640.0]), 640.0);
        assert_eq!(document_extent(std::iter::empty()), 0.0);
    }

    #[test]
    fn splash_style_before_and_after_first_frame() {
        let placement = Placement {
            left: 400.0,
            top: 120.0,
        };

        let bare = splash_style(placement, 200.0, None);
        assert_eq!(
            bare,
            "position: absolute; left: 400px; top: 120px; width: 200px; height: 200px;"
        );

        let sheet = SpriteSheet::default();
        let framed = splash_style(placement, 200.0, Some(&sheet.frame_background(0)));
        assert!(framed.starts_with(&bare));
        assert!(
            framed.contains("background: url(img/splash/splash0.png) center center no-repeat;")
        );
        assert!(framed.ends_with("background-size: 100% 100%;"));
    }
}
