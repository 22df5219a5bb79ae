use log::debug;

use crate::chart::ChartSpec;
use crate::error::Result;

/// Minimal contract the dashboard needs from a charting backend: build an
/// instance bound to a target element, and release it. Anything offering
/// these two calls is substitutable, including test doubles.
pub trait ChartBackend {
    /// Opaque token for one live chart instance.
    type Handle;

    fn construct(&self, target: &str, spec: &ChartSpec) -> Result<Self::Handle>;

    fn destroy(&self, handle: Self::Handle);
}

/// One drawing region and the single live chart instance bound to it.
///
/// Invariant: at most one live instance exists per surface. [`rebuild`]
/// releases the previous instance before constructing its replacement, and
/// dropping the surface releases whatever it still holds.
///
/// [`rebuild`]: ChartSurface::rebuild
pub struct ChartSurface<B: ChartBackend> {
    backend: B,
    target: String,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSurface<B> {
    pub fn new(backend: B, target: impl Into<String>) -> Self {
        Self {
            backend,
            target: target.into(),
            handle: None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.handle.is_some()
    }

    /// Destroys the current instance, if any, then constructs a fresh one
    /// from `spec`. On a construct failure the surface is left empty, never
    /// holding a stale handle.
    pub fn rebuild(&mut self, spec: &ChartSpec) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
        }
        debug!("rebuilding {:?} chart on #{}", spec.kind, self.target);
        self.handle = Some(self.backend.construct(&self.target, spec)?);
        Ok(())
    }

    /// Releases the held instance. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("tearing down chart on #{}", self.target);
            self.backend.destroy(handle);
        }
    }
}

impl<B: ChartBackend> Drop for ChartSurface<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::status_bar;
    use crate::error::ChartError;
    use model::PredictionStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Instrumented backend recording every construct/destroy call. Handles
    /// are sequence numbers so destroy order is observable.
    #[derive(Clone, Default)]
    struct CountingBackend {
        calls: Rc<RefCell<Vec<String>>>,
        next_handle: Rc<RefCell<usize>>,
        fail_construct: Rc<RefCell<bool>>,
    }

    impl CountingBackend {
        fn live_count(&self) -> isize {
            self.calls
                .borrow()
                .iter()
                .map(|call| if call.starts_with("construct") { 1 } else { -1 })
                .sum()
        }
    }

    impl ChartBackend for CountingBackend {
        type Handle = usize;

        fn construct(&self, target: &str, _spec: &ChartSpec) -> Result<usize> {
            if *self.fail_construct.borrow() {
                return Err(ChartError::Backend("construct refused".to_string()));
            }
            let mut next = self.next_handle.borrow_mut();
            *next += 1;
            self.calls.borrow_mut().push(format!("construct {} #{}", *next, target));
            Ok(*next)
        }

        fn destroy(&self, handle: usize) {
            self.calls.borrow_mut().push(format!("destroy {}", handle));
        }
    }

    fn spec() -> ChartSpec {
        status_bar(Some(PredictionStatus::Success))
    }

    #[test]
    fn test_first_rebuild_only_constructs() {
        let backend = CountingBackend::default();
        let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");

        assert!(!surface.is_rendered());
        surface.rebuild(&spec()).unwrap();

        assert!(surface.is_rendered());
        assert_eq!(
            *backend.calls.borrow(),
            vec!["construct 1 #chart-status-bar".to_string()]
        );
    }

    #[test]
    fn test_rebuild_destroys_before_constructing() {
        let backend = CountingBackend::default();
        let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");

        surface.rebuild(&spec()).unwrap();
        surface.rebuild(&spec()).unwrap();

        assert_eq!(
            *backend.calls.borrow(),
            vec![
                "construct 1 #chart-status-bar".to_string(),
                "destroy 1".to_string(),
                "construct 2 #chart-status-bar".to_string(),
            ]
        );
    }

    #[test]
    fn test_repeated_rebuilds_never_leak_instances() {
        let backend = CountingBackend::default();
        let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");

        for _ in 0..10 {
            surface.rebuild(&spec()).unwrap();
            assert_eq!(backend.live_count(), 1);
        }
    }

    #[test]
    fn test_teardown_releases_the_instance() {
        let backend = CountingBackend::default();
        let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");

        surface.rebuild(&spec()).unwrap();
        surface.teardown();

        assert!(!surface.is_rendered());
        assert_eq!(backend.live_count(), 0);

        // Idempotent: nothing left to destroy.
        surface.teardown();
        assert_eq!(backend.calls.borrow().len(), 2);
    }

    #[test]
    fn test_drop_releases_the_instance() {
        let backend = CountingBackend::default();
        {
            let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");
            surface.rebuild(&spec()).unwrap();
        }
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn test_failed_construct_leaves_surface_empty() {
        let backend = CountingBackend::default();
        let mut surface = ChartSurface::new(backend.clone(), "chart-status-bar");

        surface.rebuild(&spec()).unwrap();
        *backend.fail_construct.borrow_mut() = true;

        assert!(surface.rebuild(&spec()).is_err());
        assert!(!surface.is_rendered());
        // The old instance was still released; no handle leaked.
        assert_eq!(backend.live_count(), 0);

        *backend.fail_construct.borrow_mut() = false;
        surface.rebuild(&spec()).unwrap();
        assert_eq!(backend.live_count(), 1);
    }
}
