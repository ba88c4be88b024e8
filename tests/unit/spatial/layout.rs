//! Tests for screen fitting and letterbox pointer mapping

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use slidetile::puzzle::Grid;
    use slidetile::spatial::layout::fit_within;
    use slidetile::spatial::{Dimensions, Letterbox, Slot};

    const SCREEN: Dimensions = Dimensions::new(800, 600);

    // Tests oversized images shrink to the limiting axis
    // Verified by always scaling to the screen width
    #[test]
    fn test_fit_within_scales_to_limiting_axis() {
        let cases = [
            ((1600, 1200), (800, 600)),
            ((1600, 600), (800, 300)),
            ((800, 1200), (400, 600)),
            ((2000, 2000), (600, 600)),
            ((1000, 700), (800, 560)),
        ];

        for ((width, height), (expected_width, expected_height)) in cases {
            let fitted = fit_within(Dimensions::new(width, height), SCREEN);
            assert_eq!(
                fitted,
                Dimensions::new(expected_width, expected_height),
                "{width}x{height}"
            );
        }
    }

    // Tests images that already fit keep their size
    // Verified by scaling small images up to the screen
    #[test]
    fn test_fit_within_keeps_small_images() {
        let image = Dimensions::new(300, 200);

        assert_eq!(fit_within(image, SCREEN), image);
        assert_eq!(fit_within(SCREEN, SCREEN), SCREEN);
    }

    // Tests the scaled axis truncates and never collapses to zero
    // Verified by rounding instead of truncating
    #[test]
    fn test_fit_within_truncates() {
        assert_eq!(
            fit_within(Dimensions::new(1000, 333), SCREEN),
            Dimensions::new(800, 266)
        );
        assert_eq!(
            fit_within(Dimensions::new(10_000, 1), SCREEN),
            Dimensions::new(800, 1)
        );
    }

    // Tests a zero screen axis still yields at least one pixel on both axes
    // Verified by clamping only the derived axis
    #[test]
    fn test_fit_within_zero_screen_axis() {
        assert_eq!(
            fit_within(Dimensions::new(800, 600), Dimensions::new(0, 600)),
            Dimensions::new(1, 1)
        );
        assert_eq!(
            fit_within(Dimensions::new(300, 900), Dimensions::new(800, 0)),
            Dimensions::new(1, 1)
        );
        assert_eq!(
            fit_within(Dimensions::new(300, 200), Dimensions::new(0, 0)),
            Dimensions::new(1, 1)
        );
    }

    // Tests the fitted image is centered and pointer input is translated
    // Verified by anchoring the image at the top-left corner
    #[test]
    fn test_letterbox_maps_pointer_into_grid_space() {
        let letterbox = Letterbox::new(Dimensions::new(400, 600), SCREEN);

        assert_eq!((letterbox.left, letterbox.top), (200, 0));
        assert_eq!(letterbox.to_grid_space(199, 10), None);
        assert_eq!(letterbox.to_grid_space(200, 10), Some((0, 10)));
        assert_eq!(letterbox.to_grid_space(599, 599), Some((399, 599)));
        assert_eq!(letterbox.to_grid_space(600, 10), None);
    }

    // Tests translated pointers drive grid moves without casting
    // Verified by offsetting by the padding twice
    #[test]
    fn test_letterbox_output_feeds_grid_moves() {
        let image = RgbaImage::new(400, 600);
        let mut grid = Grid::new(&image, 2, 3).unwrap();
        let letterbox = Letterbox::new(Dimensions::new(400, 600), SCREEN);

        let (x, y) = letterbox.to_grid_space(500, 50).unwrap();

        assert_eq!((x, y), (300, 50));
        assert!(grid.move_at_pixel(x, y).moved());
        assert_eq!(grid.empty_slot(), Slot::new(1, 0));
    }

    // Tests vertical padding for wide images
    // Verified by splitting padding onto the left only
    #[test]
    fn test_letterbox_pads_vertically() {
        let letterbox = Letterbox::new(Dimensions::new(800, 300), SCREEN);

        assert_eq!((letterbox.left, letterbox.top), (0, 150));
        assert_eq!(letterbox.to_grid_space(0, 149), None);
        assert_eq!(letterbox.to_grid_space(0, 150), Some((0, 0)));
        assert_eq!(letterbox.to_grid_space(0, 450), None);
    }
}
