//! Playback overlay state machine.
//!
//! The landing page holds exactly one piece of mutable UI state: the
//! identifier of the video currently playing in the overlay, or none. While
//! a video is active, page scroll is suppressed; when the overlay is
//! dismissed, scroll is restored. This module is the reference model for
//! that contract; the client script emitted by the asset pipeline implements
//! the same transitions in the browser.

use crate::model::VideoId;

/// The page-scroll resource suppressed while the overlay is open.
///
/// `suspend` and `restore` are entry/exit actions: each is invoked exactly
/// once per open/closed transition, never repeatedly within a state.
pub trait ScrollLock {
    fn suspend(&mut self);
    fn restore(&mut self);
}

/// Two-state playback overlay: closed, or playing exactly one video.
///
/// The lock is released on every exit path. Dropping an open overlay
/// restores scroll, so abrupt teardown cannot leave the page locked.
#[derive(Debug)]
pub struct PlaybackOverlay<L: ScrollLock> {
    active: Option<VideoId>,
    lock: L,
}

impl<L: ScrollLock> PlaybackOverlay<L> {
    pub fn new(lock: L) -> Self {
        Self { active: None, lock }
    }

    /// Open the overlay on a video, suspending scroll if it was not already
    /// suspended. Opening while a video is active switches the video without
    /// re-running the entry action.
    pub fn open(&mut self, video: VideoId) {
        if self.active.is_none() {
            self.lock.suspend();
        }
        self.active = Some(video);
    }

    /// Dismiss the overlay, restoring scroll. Dismissing a closed overlay is
    /// a no-op.
    pub fn dismiss(&mut self) {
        if self.active.take().is_some() {
            self.lock.restore();
        }
    }

    pub fn active(&self) -> Option<&VideoId> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

impl<L: ScrollLock> Drop for PlaybackOverlay<L> {
    fn drop(&mut self) {
        if self.active.is_some() {
            self.lock.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every suspend/restore call and the resulting lock state.
    #[derive(Default)]
    struct RecordingLock {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl RecordingLock {
        fn with_log(log: Rc<RefCell<Vec<&'static str>>>) -> Self {
            Self { log }
        }
    }

    impl ScrollLock for RecordingLock {
        fn suspend(&mut self) {
            self.log.borrow_mut().push("suspend");
        }

        fn restore(&mut self) {
            self.log.borrow_mut().push("restore");
        }
    }

    fn video(id: &str) -> VideoId {
        VideoId::parse(id).unwrap()
    }

    #[test]
    fn open_then_dismiss_round_trips_the_lock() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut overlay = PlaybackOverlay::new(RecordingLock::with_log(Rc::clone(&log)));

        overlay.open(video("1119700042"));
        assert!(overlay.is_open());
        assert_eq!(overlay.active().unwrap().as_str(), "1119700042");

        overlay.dismiss();
        assert!(!overlay.is_open());
        assert_eq!(*log.borrow(), vec!["suspend", "restore"]);
    }

    #[test]
    fn dismissing_a_closed_overlay_is_a_no_op() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut overlay = PlaybackOverlay::new(RecordingLock::with_log(Rc::clone(&log)));

        overlay.dismiss();
        overlay.dismiss();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn switching_videos_does_not_rerun_the_entry_action() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut overlay = PlaybackOverlay::new(RecordingLock::with_log(Rc::clone(&log)));

        overlay.open(video("1119700042"));
        overlay.open(video("365052203"));

        assert_eq!(overlay.active().unwrap().as_str(), "365052203");
        assert_eq!(*log.borrow(), vec!["suspend"]);

        overlay.dismiss();
        assert_eq!(*log.borrow(), vec!["suspend", "restore"]);
    }

    #[test]
    fn dropping_an_open_overlay_releases_the_lock() {
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let mut overlay = PlaybackOverlay::new(RecordingLock::with_log(Rc::clone(&log)));
            overlay.open(video("1119700042"));
        }

        assert_eq!(*log.borrow(), vec!["suspend", "restore"]);
    }

    #[test]
    fn dropping_a_closed_overlay_touches_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let mut overlay = PlaybackOverlay::new(RecordingLock::with_log(Rc::clone(&log)));
            overlay.open(video("1119700042"));
            overlay.dismiss();
        }

        assert_eq!(*log.borrow(), vec!["suspend", "restore"]);
    }
}
