mod tests {
    use strip_animator::color::BLACK;
    use strip_animator::{PixelBuffer, Rgb};

    fn numbered<const N: usize>() -> PixelBuffer<N> {
        let mut pixels = PixelBuffer::new();
        for index in 0..N {
            pixels.set(index, Rgb::new(index as u8, 0, 0));
        }
        pixels
    }

    #[test]
    fn test_new_buffer_is_black() {
        let pixels: PixelBuffer<8> = PixelBuffer::new();
        assert_eq!(pixels.len(), 8);
        assert!(pixels.iter().all(|color| *color == BLACK));
    }

    #[test]
    fn test_out_of_range_reads() {
        let pixels: PixelBuffer<4> = numbered();
        assert_eq!(pixels.get(3), Some(Rgb::new(3, 0, 0)));
        assert_eq!(pixels.get(4), None);
        assert_eq!(pixels.color(4), BLACK);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_write_panics_in_debug() {
        let mut pixels: PixelBuffer<3> = PixelBuffer::new();
        pixels.set(3, Rgb::new(1, 2, 3));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_range_write_is_ignored_in_release() {
        let mut pixels: PixelBuffer<3> = numbered();
        pixels.set(3, Rgb::new(9, 9, 9));
        assert_eq!(pixels.as_slice(), numbered::<3>().as_slice());
        assert_eq!(pixels.get(3), None);
    }

    #[test]
    fn test_rotate_right() {
        let mut pixels: PixelBuffer<5> = numbered();
        pixels.rotate_right(1);
        let reds: Vec<u8> = pixels.iter().map(|color| color.r).collect();
        assert_eq!(reds, vec![4, 0, 1, 2, 3]);

        pixels.rotate_right(2);
        let reds: Vec<u8> = pixels.iter().map(|color| color.r).collect();
        assert_eq!(reds, vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn test_full_rotation_is_identity() {
        let original: PixelBuffer<7> = numbered();
        let mut pixels = original.clone();
        for _ in 0..7 {
            pixels.rotate_right(1);
        }
        assert_eq!(pixels.as_slice(), original.as_slice());

        pixels.rotate_right(7 * 3);
        assert_eq!(pixels.as_slice(), original.as_slice());
    }

    #[test]
    fn test_fill_clear_and_darken() {
        let mut pixels: PixelBuffer<3> = PixelBuffer::new();
        pixels.fill(Rgb::new(30, 5, 200));
        pixels.darken_all(10);
        assert!(pixels.iter().all(|color| *color == Rgb::new(20, 0, 190)));

        pixels.clear();
        assert!(pixels.iter().all(|color| *color == BLACK));
    }
}
