mod tests {
    use strip_animator::program::ProgramMachine;
    use strip_animator::{EngineConfig, PROGRAM_COUNT, Playlist, ProgramId};

    #[test]
    fn test_from_raw() {
        for (raw, program) in ProgramId::ALL.iter().enumerate() {
            assert_eq!(ProgramId::from_raw(raw as u8), Some(*program));
            assert_eq!(*program as u8, raw as u8);
        }
        assert_eq!(ProgramId::from_raw(PROGRAM_COUNT as u8), None);
        assert_eq!(ProgramId::from_raw(255), None);
    }

    #[test]
    fn test_names_round_trip() {
        for program in ProgramId::ALL {
            assert_eq!(ProgramId::parse_from_str(program.as_str()), Some(program));
        }
        assert_eq!(ProgramId::EyeSweep.as_str(), "eye_sweep");
        assert_eq!(ProgramId::parse_from_str("Eye_Sweep"), None);
        assert_eq!(ProgramId::parse_from_str(""), None);
    }

    #[test]
    fn test_button_order() {
        assert_eq!(
            ProgramId::ALL,
            [
                ProgramId::RandomFill,
                ProgramId::EyeSweep,
                ProgramId::PulseFade,
                ProgramId::CometTrail,
                ProgramId::Sparkle,
                ProgramId::GradientRotate,
                ProgramId::Off,
            ]
        );
    }

    #[test]
    fn test_machine_cycles_and_wraps() {
        let mut machine = ProgramMachine::new(EngineConfig::default().programs);
        assert_eq!(machine.current(), ProgramId::RandomFill);
        assert!(machine.needs_entry());
        machine.mark_entered();
        assert!(!machine.needs_entry());

        for expected in &ProgramId::ALL[1..] {
            assert!(!machine.advance());
            assert_eq!(machine.current(), *expected);
            assert!(machine.needs_entry());
            machine.mark_entered();
        }

        assert!(machine.advance());
        assert_eq!(machine.current(), ProgramId::RandomFill);
        assert_eq!(machine.position(), 0);
        assert!(machine.needs_entry());
    }

    #[test]
    fn test_machine_empty_playlist_falls_back_to_all() {
        let machine = ProgramMachine::new(Playlist::new());
        assert_eq!(machine.len(), PROGRAM_COUNT);
        assert_eq!(machine.programs(), &ProgramId::ALL[..]);
    }

    #[test]
    fn test_machine_select() {
        let config = EngineConfig::with_programs(&[ProgramId::Sparkle, ProgramId::Off]);
        let mut machine = ProgramMachine::new(config.programs);
        machine.mark_entered();

        assert!(!machine.select(ProgramId::EyeSweep));
        assert_eq!(machine.current(), ProgramId::Sparkle);
        assert!(!machine.needs_entry());

        assert!(machine.select(ProgramId::Off));
        assert_eq!(machine.position(), 1);
        assert!(machine.needs_entry());
    }
}
