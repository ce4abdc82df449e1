mod tests {
    use embassy_time::{Duration, Instant};
    use strip_animator::{
        AnimationEngine, ButtonEvent, EngineConfig, EntropySource, FrameScheduler, InputQueue,
        OutputDriver, ProgramId, Rgb,
    };

    struct FixedEntropy;

    impl EntropySource for FixedEntropy {
        fn read_noise(&mut self) -> u32 {
            0x1234
        }
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_tick_writes_one_frame() {
        let queue: InputQueue<4> = InputQueue::new();
        let engine: AnimationEngine<FixedEntropy, 6, 6> =
            AnimationEngine::new(FixedEntropy, EngineConfig::default());
        let mut scheduler = FrameScheduler::new(engine, RecordingDriver::default(), queue.receiver());

        let result = scheduler.tick(at(0));
        assert_eq!(result.next_deadline, at(1));
        assert_eq!(result.sleep_duration, Duration::from_millis(1));

        let frames = &scheduler.output().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 6);
        assert_eq!(frames[0].as_slice(), scheduler.engine().pixels().as_slice());
    }

    #[test]
    fn test_queued_presses_switch_programs() {
        let queue: InputQueue<4> = InputQueue::new();
        let engine: AnimationEngine<FixedEntropy, 6, 6> =
            AnimationEngine::new(FixedEntropy, EngineConfig::default());
        let mut scheduler = FrameScheduler::new(engine, RecordingDriver::default(), queue.receiver());

        scheduler.tick(at(0));
        assert_eq!(scheduler.engine().current_program(), ProgramId::RandomFill);

        let sender = queue.sender();
        sender.try_send(ButtonEvent::Pressed).unwrap();
        sender.try_send(ButtonEvent::Pressed).unwrap();
        scheduler.tick(at(1));

        assert_eq!(scheduler.engine().current_program(), ProgramId::PulseFade);
        assert!(!scheduler.engine().machine().needs_entry());
        assert!(queue.try_receive().is_err());
    }

    #[test]
    fn test_skips_backlog_after_stall() {
        let queue: InputQueue<1> = InputQueue::new();
        let config = EngineConfig::with_programs(&[ProgramId::Off]);
        let engine: AnimationEngine<FixedEntropy, 4, 2> = AnimationEngine::new(FixedEntropy, config);
        let mut scheduler = FrameScheduler::with_frame_duration(
            engine,
            RecordingDriver::default(),
            queue.receiver(),
            Duration::from_millis(10),
        );

        let result = scheduler.tick(at(0));
        assert_eq!(result.next_deadline, at(10));

        // Late but within two frames: keep the cadence
        let result = scheduler.tick(at(25));
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));

        // Stalled well past the deadline: restart the cadence from now
        let result = scheduler.tick(at(500));
        assert_eq!(result.next_deadline, at(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        scheduler.engine_mut().next_program();
        assert_eq!(scheduler.engine().current_program(), ProgramId::Off);
        assert_eq!(scheduler.output().frames.len(), 3);
    }
}
