mod common;

mod tests {
    use myrtio_frame_engine::color::color24_to_16bit;
    use myrtio_frame_engine::{DeviceConfig, GridPoint, Matrix, RangeError, Rgb};

    use crate::common::{MatrixRecorder, RecordingLogger};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn matrix() -> Matrix<MatrixRecorder, RecordingLogger> {
        Matrix::matrix(
            MatrixRecorder::default(),
            RecordingLogger::default(),
            &DeviceConfig::MATRIX,
        )
    }

    fn staged(matrix: &Matrix<MatrixRecorder, RecordingLogger>, x: u8, y: u8) -> Option<u16> {
        matrix
            .driver()
            .pixels
            .iter()
            .rev()
            .find(|(point, _)| *point == GridPoint { x, y })
            .map(|(_, color)| *color)
    }

    #[test]
    fn test_grid_pixel_reaches_driver_as_16bit() {
        let mut matrix = matrix();
        assert_eq!(matrix.len(), 125);
        assert_eq!(matrix.grid_add_pixel(3, 4, Rgb::new(200, 100, 50)), Ok(()));
        matrix.draw_instant();

        assert_eq!(
            staged(&matrix, 3, 4),
            Some(color24_to_16bit(Rgb::new(200, 100, 50)))
        );
        assert_eq!(staged(&matrix, 4, 3), Some(0));
        assert_eq!(matrix.driver().pixels.len(), 125);
    }

    #[test]
    fn test_grid_out_of_range() {
        let mut matrix = matrix();
        assert_eq!(
            matrix.grid_add_pixel(11, 0, RED),
            Err(RangeError::Grid { x: 11, y: 0 })
        );
        assert_eq!(
            matrix.grid_add_pixel(0, 11, RED),
            Err(RangeError::Grid { x: 0, y: 11 })
        );
        assert_eq!(matrix.logger().lines.len(), 2);
        assert!(matrix.target().iter().all(|pixel| *pixel == Rgb::default()));
    }

    #[test]
    fn test_min_indicator_pattern() {
        let mut matrix = matrix();
        matrix.set_min_indicator(0b1010, RED);
        assert_eq!(matrix.indicator(0), Some(Rgb::default()));
        assert_eq!(matrix.indicator(1), Some(RED));
        assert_eq!(matrix.indicator(2), Some(Rgb::default()));
        assert_eq!(matrix.indicator(3), Some(RED));

        // Cleared bits keep their previous color
        matrix.set_min_indicator(0b0001, WHITE);
        assert_eq!(matrix.indicator(0), Some(WHITE));
        assert_eq!(matrix.indicator(1), Some(RED));

        matrix.draw_instant();
        assert_eq!(staged(&matrix, 10, 11), Some(0xFFFF));
        assert_eq!(staged(&matrix, 9, 11), Some(0xF800));
        assert_eq!(staged(&matrix, 8, 11), Some(0));
        assert_eq!(staged(&matrix, 7, 11), Some(0xF800));
    }

    #[test]
    fn test_flush_clears_everything() {
        let mut matrix = matrix();
        matrix.fill(WHITE);
        matrix.set_min_indicator(0b1111, WHITE);
        matrix.draw_instant();
        assert_eq!(matrix.last_frame().total_current, 125 * 60);

        matrix.grid_flush();
        let stats = matrix.draw_instant();
        assert_eq!(stats.total_current, 0);
        assert_eq!(stats.brightness, 255);
        assert!(matrix.current().iter().all(|pixel| *pixel == Rgb::default()));
        assert!(matrix.driver().brightness.iter().all(|brightness| *brightness == 255));
    }

    #[test]
    fn test_matrix_is_unbounded_by_default() {
        let mut matrix = matrix();
        matrix.fill(WHITE);
        assert_eq!(matrix.draw_instant().brightness, 255);

        matrix.set_current_limit(750);
        assert_eq!(matrix.draw_instant().brightness, 25);

        // Falling back under the limit restores base brightness
        matrix.fill(Rgb::new(0, 0, 0));
        assert_eq!(matrix.draw_instant().brightness, 255);
        assert_eq!(matrix.driver().brightness.last(), Some(&255));
    }

    #[test]
    fn test_print_number() {
        let mut matrix = matrix();
        assert_eq!(matrix.print_number(0, 0, 1, RED), Ok(()));
        // 010 / 110 / 010 / 010 / 111
        assert_eq!(matrix.grid_pixel(1, 0), Some(RED));
        assert_eq!(matrix.grid_pixel(0, 0), Some(Rgb::default()));
        assert_eq!(matrix.grid_pixel(0, 1), Some(RED));
        assert_eq!(matrix.grid_pixel(2, 4), Some(RED));
        let lit = matrix.target().iter().filter(|pixel| **pixel == RED).count();
        assert_eq!(lit, 8);

        assert_eq!(matrix.print_number(0, 0, 10, RED), Err(RangeError::Digit(10)));
        assert_eq!(matrix.logger().lines.len(), 1);
    }

    #[test]
    fn test_print_char_clips_at_edge() {
        let mut matrix = matrix();
        // 111 / 101 / 111 / 100 / 100, two rows fall off the grid
        assert_eq!(
            matrix.print_char(8, 8, 'P', RED),
            Err(RangeError::Grid { x: 8, y: 11 })
        );
        assert_eq!(matrix.grid_pixel(8, 8), Some(RED));
        assert_eq!(matrix.grid_pixel(9, 9), Some(Rgb::default()));
        assert_eq!(matrix.grid_pixel(10, 10), Some(RED));
        assert_eq!(matrix.logger().lines.len(), 2);
        assert!(matrix.indicator(0).is_some_and(|pixel| pixel == Rgb::default()));
    }
}
