//! Tests for error formatting, sources and helper constructors

#[cfg(test)]
mod tests {
    use slidetile::io::error::{PuzzleError, invalid_dimensions, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests grid errors name the rejected dimensions
    // Verified by swapping columns and rows in the message
    #[test]
    fn test_grid_error_messages() {
        let invalid = invalid_dimensions(1, 1, &"a puzzle needs at least two slots");
        assert_eq!(
            invalid.to_string(),
            "Invalid grid 1x1: a puzzle needs at least two slots"
        );

        let too_small = PuzzleError::ImageTooSmall {
            image: (3, 2),
            grid: (4, 1),
        };
        assert_eq!(
            too_small.to_string(),
            "Image 3x2 is too small for a 4x1 grid"
        );
    }

    // Tests the suggestion error reports the fitted size and tile minimum
    // Verified by reporting the original image size
    #[test]
    fn test_no_suggestion_message() {
        let error = PuzzleError::NoSuggestion {
            scaled: (250, 600),
            min_tile_size: 100,
        };

        assert_eq!(
            error.to_string(),
            "No grid size fits a 250x600 image with tiles of at least 100px"
        );
    }

    // Tests wrapped I/O failures keep their source and name the operation
    // Verified by returning None from source for file system errors
    #[test]
    fn test_io_errors_expose_source() {
        let error = PuzzleError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };

        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "File system error during create directory on 'out': disk full"
        );

        let load = PuzzleError::ImageLoad {
            path: PathBuf::from("missing.png"),
            source: image::ImageError::IoError(std::io::Error::other("not found")),
        };
        assert!(load.to_string().starts_with("Failed to load image 'missing.png'"));
        assert!(load.source().is_some());
    }

    // Tests parameter errors carry name, value and reason without a source
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("moves", &"-3", &"must not be negative");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'moves' = '-3': must not be negative"
        );
        assert!(error.source().is_none());
    }
}
