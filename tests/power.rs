mod tests {
    use myrtio_frame_engine::color::Rgb;
    use myrtio_frame_engine::power::{PowerBudget, estimate_current, throttle};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_estimate_current_full_white() {
        assert_eq!(estimate_current(WHITE, 255), 60);
        assert_eq!(estimate_current(Rgb::new(255, 0, 0), 255), 20);
        assert_eq!(estimate_current(Rgb::new(0, 0, 0), 255), 0);
    }

    #[test]
    fn test_estimate_current_floors_each_division() {
        // 20 * 200 / 255 = 15.68 -> 15, then 15 * 128 / 255 = 7.52 -> 7
        assert_eq!(estimate_current(Rgb::new(200, 0, 0), 128), 7);
        // 20 * 25 / 255 = 1.96 -> 1, then 1 * 200 / 255 = 0.78 -> 0
        // (one combined division would give 1)
        assert_eq!(estimate_current(Rgb::new(25, 0, 0), 200), 0);
        // 20 * 12 / 255 = 0.94 -> 0
        assert_eq!(estimate_current(Rgb::new(12, 0, 0), 255), 0);
        // 60 * 100 / 255 = 23.5 -> 23
        assert_eq!(estimate_current(WHITE, 100), 23);
    }

    #[test]
    fn test_throttle() {
        assert_eq!(throttle(3000, 255, Some(300)), 25);
        assert_eq!(throttle(300, 255, Some(300)), 255);
        assert_eq!(throttle(299, 255, Some(300)), 255);
        assert_eq!(throttle(301, 255, Some(300)), 254);
        assert_eq!(throttle(u32::MAX, 255, None), 255);
    }

    #[test]
    fn test_budget_accumulates_frame() {
        let mut budget = PowerBudget::new(Some(300));
        budget.begin_frame();
        for _ in 0..50 {
            budget.accumulate(WHITE, 255);
        }
        assert_eq!(budget.total(), 3000);

        let stats = budget.finish_frame(255);
        assert_eq!(stats.total_current, 3000);
        assert_eq!(stats.brightness, 25);
        assert!(stats.is_throttled(255));

        budget.begin_frame();
        assert_eq!(budget.total(), 0);
        assert_eq!(budget.finish_frame(255).brightness, 255);
    }

    #[test]
    fn test_budget_is_memoryless() {
        let mut budget = PowerBudget::new(Some(100));

        budget.begin_frame();
        budget.accumulate(WHITE, 255);
        budget.accumulate(WHITE, 255);
        assert_eq!(budget.finish_frame(200).brightness, 166);

        budget.begin_frame();
        budget.accumulate(WHITE, 255);
        assert_eq!(budget.finish_frame(200).brightness, 200);
    }
}
