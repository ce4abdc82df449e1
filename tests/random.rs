mod tests {
    use strip_animator::{EntropySource, Random, gather_seed};

    struct ScriptedEntropy {
        samples: Vec<u32>,
        reads: usize,
    }

    impl EntropySource for ScriptedEntropy {
        fn read_noise(&mut self) -> u32 {
            let sample = self.samples.get(self.reads).copied().unwrap_or(0);
            self.reads += 1;
            sample
        }
    }

    #[test]
    fn test_gather_seed_mixes_shifted_readings() {
        let mut entropy = ScriptedEntropy {
            samples: vec![1; 16],
            reads: 0,
        };
        let seed = gather_seed(&mut entropy);

        let mut expected = 1u32;
        for shift in (3..31).step_by(3) {
            expected ^= 1 << shift;
        }
        assert_eq!(seed, expected);
        assert_eq!(entropy.reads, 11);
    }

    #[test]
    fn test_gather_seed_of_silent_source() {
        let mut entropy = ScriptedEntropy {
            samples: Vec::new(),
            reads: 0,
        };
        assert_eq!(gather_seed(&mut entropy), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Random::with_seed(42);
        let mut b = Random::with_seed(42);
        for _ in 0..32 {
            assert_eq!(a.uniform(1000), b.uniform(1000));
        }

        a.reseed(7);
        b.reseed(7);
        assert_eq!(a.channel(255), b.channel(255));
    }

    #[test]
    fn test_ranges() {
        let mut rng = Random::with_seed(3);
        for _ in 0..200 {
            assert!(rng.uniform(10) < 10);
            let value = rng.uniform_range(500, 800);
            assert!((500..800).contains(&value));
            assert!(rng.channel(128) < 128);
            assert!(rng.index(7) < 7);
            let hue = rng.hue();
            assert!((0.0..1.0).contains(&hue));
        }

        assert_eq!(rng.uniform(0), 0);
        assert_eq!(rng.uniform_range(5, 5), 5);
        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.channel(0), 0);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = Random::with_seed(9);
        let mut items: Vec<usize> = (0..10).collect();
        rng.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, (0..10).collect::<Vec<_>>());
    }
}
