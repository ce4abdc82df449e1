mod tests {
    use strip_animator::color::{BLACK, Rgb, blend, darken, hsl_to_rgb, rgb_from_u32};
    use strip_animator::{Hsl, gamma_correct, ws2812_lut};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x7f0000), Rgb::new(127, 0, 0));
        assert_eq!(rgb_from_u32(0x123456), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_from_u32(0), BLACK);
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend(RED, BLUE, 0.5), Rgb::new(128, 0, 128));
    }

    #[test]
    fn test_blend_clamps_progress() {
        assert_eq!(blend(RED, BLUE, -1.0), RED);
        assert_eq!(blend(RED, BLUE, 2.0), BLUE);
    }

    #[test]
    fn test_blend_same_color() {
        let color = Rgb::new(12, 200, 77);
        for step in 0..=10 {
            let progress = step as f32 / 10.0;
            assert_eq!(blend(color, color, progress), color);
        }
    }

    #[test]
    fn test_darken() {
        let color = Rgb::new(10, 200, 5);
        assert_eq!(darken(color, 0), color);
        assert_eq!(darken(color, 20), Rgb::new(0, 180, 0));
        assert_eq!(darken(color, 255), BLACK);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_lightness_extremes() {
        assert_eq!(hsl_to_rgb(0.3, 1.0, 0.0), BLACK);
        assert_eq!(hsl_to_rgb(0.3, 1.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(0.7, 0.0, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(-0.5, 1.0, 0.5), hsl_to_rgb(0.5, 1.0, 0.5));
    }

    #[test]
    fn test_hsl_struct_matches_function() {
        let hsl = Hsl::new(0.25, 1.0, 0.2);
        assert_eq!(hsl.to_rgb(), hsl_to_rgb(0.25, 1.0, 0.2));
        assert_eq!(Rgb::from(hsl), hsl.to_rgb());
    }

    #[test]
    fn test_dim_hsl_stays_dim() {
        // Full saturation at lightness 0.2 peaks at 0.4 of full scale
        for degree in (0..360).step_by(15) {
            let color = hsl_to_rgb(degree as f32 / 360.0, 1.0, 0.2);
            assert!(color.r <= 102 && color.g <= 102 && color.b <= 102);
        }
    }

    #[test]
    fn test_gamma() {
        assert_eq!(gamma_correct(BLACK), BLACK);
        assert_eq!(gamma_correct(Rgb::new(255, 255, 255)), Rgb::new(255, 255, 255));
        assert_eq!(ws2812_lut(0), 0);
        assert_eq!(ws2812_lut(255), 255);

        let mut previous = 0;
        for value in 0..=255u8 {
            let corrected = ws2812_lut(value);
            assert!(corrected >= previous);
            previous = corrected;
        }
    }
}
