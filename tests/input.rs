mod tests {
    use strip_animator::input::{TryReceiveError, TrySendError};
    use strip_animator::{Button, ButtonEvent, ButtonPoller, EdgeDetector, InputQueue};

    struct ScriptedButton {
        levels: Vec<bool>,
        cursor: usize,
    }

    impl ScriptedButton {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.to_vec(),
                cursor: 0,
            }
        }
    }

    impl Button for ScriptedButton {
        fn is_pressed(&mut self) -> bool {
            let level = self.levels.get(self.cursor).copied().unwrap_or(false);
            self.cursor += 1;
            level
        }
    }

    #[test]
    fn test_edge_detector_reports_rising_edges_only() {
        let mut edges = EdgeDetector::new();
        assert_eq!(edges.update(false), None);
        assert_eq!(edges.update(true), Some(ButtonEvent::Pressed));
        assert_eq!(edges.update(true), None);
        assert_eq!(edges.update(true), None);
        assert_eq!(edges.update(false), None);
        assert_eq!(edges.update(true), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn test_queue_is_fifo_and_bounded() {
        let queue: InputQueue<2> = InputQueue::new();
        assert_eq!(queue.try_receive(), Err(TryReceiveError));

        queue.try_send(ButtonEvent::Pressed).unwrap();
        queue.try_send(ButtonEvent::Pressed).unwrap();
        assert_eq!(
            queue.try_send(ButtonEvent::Pressed),
            Err(TrySendError(ButtonEvent::Pressed))
        );

        let receiver = queue.receiver();
        assert_eq!(receiver.try_receive(), Ok(ButtonEvent::Pressed));
        assert_eq!(receiver.try_receive(), Ok(ButtonEvent::Pressed));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_poller_queues_one_event_per_press() {
        let queue: InputQueue<4> = InputQueue::new();
        let button = ScriptedButton::new(&[false, true, true, true, false, true]);
        let mut poller = ButtonPoller::new(button, queue.sender());

        let queued: Vec<bool> = (0..6).map(|_| poller.poll()).collect();
        assert_eq!(queued, vec![false, true, false, false, false, true]);

        assert_eq!(queue.try_receive(), Ok(ButtonEvent::Pressed));
        assert_eq!(queue.try_receive(), Ok(ButtonEvent::Pressed));
        assert_eq!(queue.try_receive(), Err(TryReceiveError));
        assert_eq!(poller.button_mut().cursor, 6);
    }

    #[test]
    fn test_poller_drops_presses_when_queue_is_full() {
        let queue: InputQueue<1> = InputQueue::new();
        let button = ScriptedButton::new(&[true, false, true]);
        let mut poller = ButtonPoller::new(button, queue.sender());

        assert!(poller.poll());
        assert!(!poller.poll());
        assert!(!poller.poll());

        assert_eq!(queue.try_receive(), Ok(ButtonEvent::Pressed));
        assert_eq!(queue.try_receive(), Err(TryReceiveError));
    }
}
