use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, error, info};

use super::animation::{Animation, AnimationEnd, Frame};
use super::selection::{RandomRotation, RotationSource, resolve_outcome};
use super::WheelConfiguration;
use crate::constants::spin::{MAX_ROTATION_DEGREES, MIN_ROTATION_DEGREES};
use crate::core::{ColorToken, SpinOutcome, SpinState};
use crate::error::WheelError;

type FinishCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Receives the visual progress of each spin
///
/// Called from the spin thread, never from the thread that called
/// [`WheelSelector::spin`].
pub trait SpinObserver: Send + Sync {
    fn on_start(&self, _configuration: &WheelConfiguration, _target_rotation_degrees: u32) {}

    fn on_frame(&self, frame: &Frame);

    /// `None` when the spin was cancelled before settling
    fn on_settle(&self, _outcome: Option<&SpinOutcome>) {}
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared between the selector and its spin thread
#[derive(Debug)]
struct Shared {
    state: Mutex<SpinState>,
    configuration: Mutex<Arc<WheelConfiguration>>,
    winner: Mutex<Option<String>>,
    /// Cleared on teardown so a pending spin stays silent
    live: AtomicBool,
    /// Cancel flag of the most recent spin, raised on teardown
    active_cancel: Mutex<Arc<AtomicBool>>,
    settled_spins: AtomicUsize,
}

/// Puts the wheel back to idle however the spin thread exits
struct SettleGuard<'a>(&'a Shared);

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        *lock(&self.0.state) = SpinState::Idle;
        self.0.settled_spins.fetch_add(1, Ordering::AcqRel);
    }
}

/// A spinnable wheel with an at-most-one-spin guard
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use decision_wheel::wheel::{FixedRotation, SpinTiming, WheelConfiguration, WheelSelector};
///
/// # fn main() -> miette::Result<()> {
/// let configuration = WheelConfiguration::new(["Pizza", "Hambur.", "Sushi"], ["#FF5252"])?
///     .with_timing(SpinTiming::instant());
///
/// let winners = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&winners);
/// let selector = WheelSelector::new(configuration)
///     .with_rotation_source(FixedRotation(1590))
///     .on_finish(move |label| sink.lock().unwrap().push(label.to_string()));
///
/// let outcome = selector.spin().expect("wheel is idle").wait()?;
/// assert_eq!(outcome.map(|o| o.winning_label), Some("Hamburguesa".to_string()));
/// assert_eq!(*winners.lock().unwrap(), ["Hamburguesa"]);
/// # Ok(())
/// # }
/// ```
pub struct WheelSelector {
    shared: Arc<Shared>,
    rotation_source: Mutex<Box<dyn RotationSource + Send>>,
    on_finish: Option<FinishCallback>,
    observer: Option<Arc<dyn SpinObserver>>,
}

impl std::fmt::Debug for WheelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelSelector")
            .field("shared", &self.shared)
            .field("on_finish", &self.on_finish.is_some())
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl WheelSelector {
    pub fn new(configuration: WheelConfiguration) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SpinState::Idle),
                configuration: Mutex::new(Arc::new(configuration)),
                winner: Mutex::new(None),
                live: AtomicBool::new(true),
                active_cancel: Mutex::new(Arc::new(AtomicBool::new(false))),
                settled_spins: AtomicUsize::new(0),
            }),
            rotation_source: Mutex::new(Box::new(RandomRotation::from_entropy())),
            on_finish: None,
            observer: None,
        }
    }

    pub fn with_rotation_source(self, source: impl RotationSource + Send + 'static) -> Self {
        self.with_boxed_rotation_source(Box::new(source))
    }

    pub fn with_boxed_rotation_source(mut self, source: Box<dyn RotationSource + Send>) -> Self {
        self.rotation_source = Mutex::new(source);
        self
    }

    /// Callback receiving the winning label, once per settled spin
    pub fn on_finish(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_finish = Some(Arc::new(callback));
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SpinObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Replace the wheel's options and colors
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyOptions`] for an empty option list, and
    /// [`WheelError::SpinInProgress`] while the wheel is spinning.
    pub fn configure<S, C>(
        &self,
        options: impl IntoIterator<Item = S>,
        colors: impl IntoIterator<Item = C>,
    ) -> Result<(), WheelError>
    where
        S: Into<String>,
        C: Into<ColorToken>,
    {
        let timing = self.configuration().timing();
        let configuration = WheelConfiguration::new(options, colors)?.with_timing(timing);
        self.replace_configuration(configuration)
    }

    /// Swap in a whole configuration
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`] while the wheel is spinning.
    pub fn replace_configuration(&self, configuration: WheelConfiguration) -> Result<(), WheelError> {
        // Holding the state lock keeps spin() from starting in between.
        let state = lock(&self.shared.state);
        if *state == SpinState::Spinning {
            return Err(WheelError::SpinInProgress);
        }

        debug!(options = configuration.options().len(), "wheel reconfigured");
        *lock(&self.shared.configuration) = Arc::new(configuration);
        Ok(())
    }

    pub fn configuration(&self) -> Arc<WheelConfiguration> {
        Arc::clone(&lock(&self.shared.configuration))
    }

    pub fn state(&self) -> SpinState {
        *lock(&self.shared.state)
    }

    /// Label reported by the last settled spin, cleared when a new spin starts
    pub fn winner(&self) -> Option<String> {
        lock(&self.shared.winner).clone()
    }

    /// Number of `Spinning -> Idle` transitions so far
    pub fn settled_spins(&self) -> usize {
        self.shared.settled_spins.load(Ordering::Acquire)
    }

    /// Start a spin unless one is already running
    ///
    /// Returns `None` without side effects while the wheel is spinning. The
    /// animation runs on its own thread; the returned handle can wait for it
    /// or cancel it.
    pub fn spin(&self) -> Option<SpinHandle> {
        let cancel = Arc::new(AtomicBool::new(false));
        let (configuration, target) = {
            let mut state = lock(&self.shared.state);
            if *state == SpinState::Spinning {
                debug!("spin ignored, wheel already spinning");
                return None;
            }
            // Draw before leaving Idle: a panicking source must not strand
            // the wheel in Spinning.
            let target = lock(&self.rotation_source).next_rotation();
            *state = SpinState::Spinning;
            *lock(&self.shared.active_cancel) = Arc::clone(&cancel);
            (Arc::clone(&lock(&self.shared.configuration)), target)
        };

        *lock(&self.shared.winner) = None;

        debug!(
            target_rotation = target,
            options = configuration.options().len(),
            "spin accepted"
        );

        let task = SpinTask {
            shared: Arc::clone(&self.shared),
            configuration,
            target,
            cancel: Arc::clone(&cancel),
            on_finish: self.on_finish.clone(),
            observer: self.observer.clone(),
        };

        match thread::Builder::new()
            .name("wheel-spin".to_string())
            .spawn(move || task.run())
        {
            Ok(thread) => Some(SpinHandle {
                target_rotation_degrees: target,
                cancel,
                thread,
            }),
            Err(err) => {
                error!(error = %err, "failed to start the spin thread");
                *lock(&self.shared.state) = SpinState::Idle;
                None
            }
        }
    }
}

impl Drop for WheelSelector {
    fn drop(&mut self) {
        self.shared.live.store(false, Ordering::Release);
        lock(&self.shared.active_cancel).store(true, Ordering::Release);
    }
}

/// Everything the spin thread owns
struct SpinTask {
    shared: Arc<Shared>,
    configuration: Arc<WheelConfiguration>,
    target: u32,
    cancel: Arc<AtomicBool>,
    on_finish: Option<FinishCallback>,
    observer: Option<Arc<dyn SpinObserver>>,
}

impl SpinTask {
    fn run(self) -> Option<SpinOutcome> {
        let _settle = SettleGuard(&self.shared);
        debug_assert!(
            (MIN_ROTATION_DEGREES..MAX_ROTATION_DEGREES).contains(&self.target),
            "rotation source produced {} degrees",
            self.target
        );

        if let Some(observer) = &self.observer {
            observer.on_start(&self.configuration, self.target);
        }

        let animation = Animation::new(
            self.target,
            self.configuration.option_count().get(),
            self.configuration.timing(),
        );
        let end = animation.run(&self.cancel, |frame| {
            if let Some(observer) = &self.observer {
                observer.on_frame(&frame);
            }
        });

        let outcome = if end == AnimationEnd::Cancelled || !self.is_wanted() {
            debug!(target_rotation = self.target, "spin cancelled");
            None
        } else {
            let outcome = resolve_outcome(&self.configuration, self.target);
            *lock(&self.shared.winner) = Some(outcome.winning_label.clone());
            info!(
                winner = %outcome.winning_label,
                index = outcome.winning_index,
                "wheel settled"
            );

            if let Some(callback) = &self.on_finish {
                callback(&outcome.winning_label);
            }
            Some(outcome)
        };

        if let Some(observer) = &self.observer {
            observer.on_settle(outcome.as_ref());
        }
        outcome
    }

    fn is_wanted(&self) -> bool {
        self.shared.live.load(Ordering::Acquire) && !self.cancel.load(Ordering::Acquire)
    }
}

/// Handle to one accepted spin
#[derive(Debug)]
pub struct SpinHandle {
    target_rotation_degrees: u32,
    cancel: Arc<AtomicBool>,
    thread: JoinHandle<Option<SpinOutcome>>,
}

impl SpinHandle {
    pub fn target_rotation_degrees(&self) -> u32 {
        self.target_rotation_degrees
    }

    /// Stop the animation; the finish callback will not be called
    ///
    /// Has no effect once the winner has been reported.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    /// Block until the spin settles
    ///
    /// Yields `None` for a cancelled spin.
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinThreadPanicked`] if the spin thread panicked, for
    /// example inside the finish callback.
    pub fn wait(self) -> Result<Option<SpinOutcome>, WheelError> {
        self.thread.join().map_err(|_| WheelError::SpinThreadPanicked)
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::wheel::{FixedRotation, SpinTiming};

    fn instant_config(options: &[&str]) -> WheelConfiguration {
        WheelConfiguration::new(options.iter().copied(), ["#FF5252"])
            .unwrap()
            .with_timing(SpinTiming::instant())
    }

    fn slow_config(options: &[&str]) -> WheelConfiguration {
        WheelConfiguration::new(options.iter().copied(), ["#FF5252"])
            .unwrap()
            .with_timing(SpinTiming::new(
                Duration::from_millis(300),
                Duration::from_millis(5),
            ))
    }

    #[test]
    fn test_spin_reports_winner_once() {
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        let selector = WheelSelector::new(instant_config(&["Pizza", "Hambur.", "Sushi"]))
            .with_rotation_source(FixedRotation(1440))
            .on_finish(move |label| {
                lock(&tx).send(label.to_string()).unwrap();
            });

        let outcome = selector.spin().unwrap().wait().unwrap().unwrap();

        assert_eq!(outcome.winning_index, 0);
        assert_eq!(outcome.winning_label, "Pizza");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), ["Pizza"]);
        assert_eq!(selector.state(), SpinState::Idle);
        assert_eq!(selector.winner().as_deref(), Some("Pizza"));
        assert_eq!(selector.settled_spins(), 1);
    }

    #[test]
    fn test_second_spin_while_spinning_is_ignored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let selector = WheelSelector::new(slow_config(&["a", "b"]))
            .on_finish(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let handle = selector.spin().unwrap();
        assert_eq!(selector.state(), SpinState::Spinning);
        assert!(selector.spin().is_none());
        assert!(selector.spin().is_none());

        handle.wait().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(selector.settled_spins(), 1);
        assert_eq!(selector.state(), SpinState::Idle);
    }

    #[test]
    fn test_selector_is_reusable() {
        let selector = WheelSelector::new(instant_config(&["a", "b", "c"]));

        for _ in 0..3 {
            let outcome = selector.spin().unwrap().wait().unwrap().unwrap();
            assert!(outcome.winning_index < 3);
            assert!((1440..2880).contains(&outcome.target_rotation_degrees));
        }
        assert_eq!(selector.settled_spins(), 3);
    }

    #[test]
    fn test_single_option_always_wins() {
        let selector = WheelSelector::new(instant_config(&["Only"]));
        for _ in 0..20 {
            let outcome = selector.spin().unwrap().wait().unwrap().unwrap();
            assert_eq!(outcome.winning_index, 0);
            assert_eq!(outcome.winning_label, "Only");
        }
    }

    #[test]
    fn test_cancelled_spin_is_silent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let selector = WheelSelector::new(slow_config(&["a", "b"]))
            .on_finish(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let handle = selector.spin().unwrap();
        handle.cancel();

        assert_eq!(handle.wait().unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(selector.state(), SpinState::Idle);
        assert_eq!(selector.winner(), None);
        assert!(selector.spin().is_some());
    }

    #[test]
    fn test_teardown_suppresses_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let selector = WheelSelector::new(slow_config(&["a", "b"]))
            .on_finish(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let handle = selector.spin().unwrap();
        drop(selector);

        assert_eq!(handle.wait().unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_teardown_stops_animation() {
        let configuration = WheelConfiguration::new(["a", "b"], ["#FF5252"])
            .unwrap()
            .with_timing(SpinTiming::new(
                Duration::from_secs(20),
                Duration::from_millis(5),
            ));
        let selector = WheelSelector::new(configuration);

        let started = Instant::now();
        let handle = selector.spin().unwrap();
        drop(selector);

        assert_eq!(handle.wait().unwrap(), None);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_panicking_rotation_source_leaves_wheel_idle() {
        let mut first = true;
        let selector = WheelSelector::new(instant_config(&["a", "b"])).with_rotation_source(
            move || {
                if std::mem::take(&mut first) {
                    panic!("no entropy");
                }
                1440
            },
        );

        let result = panic::catch_unwind(AssertUnwindSafe(|| selector.spin()));
        assert!(result.is_err());
        assert_eq!(selector.state(), SpinState::Idle);

        let outcome = selector.spin().unwrap().wait().unwrap().unwrap();
        assert_eq!(outcome.winning_label, "a");
        assert_eq!(selector.settled_spins(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_out_of_range_rotation_is_caught() {
        let selector =
            WheelSelector::new(instant_config(&["a", "b"])).with_rotation_source(FixedRotation(90));

        let result = selector.spin().unwrap().wait();

        assert!(matches!(result, Err(WheelError::SpinThreadPanicked)));
        assert_eq!(selector.state(), SpinState::Idle);
    }

    #[test]
    fn test_configure_rejected_while_spinning() {
        let selector = WheelSelector::new(slow_config(&["a", "b"]));
        let handle = selector.spin().unwrap();

        let result = selector.configure(["c"], ["#000000"]);
        assert!(matches!(result, Err(WheelError::SpinInProgress)));
        assert_eq!(selector.configuration().options(), ["a", "b"]);

        handle.wait().unwrap();
        selector.configure(["c"], Vec::<String>::new()).unwrap();
        assert_eq!(selector.configuration().options(), ["c"]);
    }

    #[test]
    fn test_configure_rejects_empty_options() {
        let selector = WheelSelector::new(instant_config(&["a"]));
        let result = selector.configure(Vec::<String>::new(), ["#000000"]);
        assert!(matches!(result, Err(WheelError::EmptyOptions)));
        assert_eq!(selector.configuration().options(), ["a"]);
    }

    #[test]
    fn test_observer_sees_frames_and_settle() {
        #[derive(Default)]
        struct Recorder {
            started: AtomicUsize,
            frames: AtomicUsize,
            settled: Mutex<Vec<Option<String>>>,
        }

        impl SpinObserver for Recorder {
            fn on_start(&self, _: &WheelConfiguration, _: u32) {
                self.started.fetch_add(1, Ordering::SeqCst);
            }

            fn on_frame(&self, _: &Frame) {
                self.frames.fetch_add(1, Ordering::SeqCst);
            }

            fn on_settle(&self, outcome: Option<&SpinOutcome>) {
                lock(&self.settled).push(outcome.map(|o| o.winning_label.clone()));
            }
        }

        let recorder = Arc::new(Recorder::default());
        let selector = WheelSelector::new(instant_config(&["x", "y"]))
            .with_rotation_source(FixedRotation(1440))
            .with_observer(recorder.clone());

        selector.spin().unwrap().wait().unwrap();

        assert_eq!(recorder.started.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.frames.load(Ordering::SeqCst), 1);
        assert_eq!(*lock(&recorder.settled), [Some("x".to_string())]);
    }

    #[test]
    fn test_panicking_callback_still_returns_to_idle() {
        let selector = WheelSelector::new(instant_config(&["a"])).on_finish(|_| panic!("boom"));

        let result = selector.spin().unwrap().wait();

        assert!(matches!(result, Err(WheelError::SpinThreadPanicked)));
        assert_eq!(selector.state(), SpinState::Idle);
    }
}
