//! Callable handles for tests and hooks.
//!
//! Declared tests and hooks are plain function pointers, but tests built at
//! runtime through the [builder](crate::builder) may also be closures. The
//! handle types below cover both so the rest of the crate never has to care.

use std::{fmt::Debug, panic::RefUnwindSafe, sync::Arc};

/// A test body, called with the iteration index of the current run.
pub trait TestFn {
    fn call_test(&self, iteration: i32);
}

impl<F> TestFn for F
where
    F: Fn(i32),
{
    fn call_test(&self, iteration: i32) {
        (self)(iteration)
    }
}

/// A setup or teardown body.
pub trait HookFn {
    fn call_hook(&self);
}

impl<F> HookFn for F
where
    F: Fn(),
{
    fn call_hook(&self) {
        (self)()
    }
}

#[derive(Clone)]
#[non_exhaustive]
pub enum TestFnHandle {
    Ptr(fn(i32)),
    Shared(Arc<dyn TestFn + Send + Sync + RefUnwindSafe>),
}

impl Debug for TestFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Shared(_) => write!(f, "Shared(...)"),
        }
    }
}

impl TestFnHandle {
    pub const fn from_const_fn(f: fn(i32)) -> Self {
        Self::Ptr(f)
    }

    pub fn from_shared<F>(f: F) -> Self
    where
        F: Fn(i32) + Send + Sync + RefUnwindSafe + 'static,
    {
        Self::Shared(Arc::new(f))
    }

    pub fn call(&self, iteration: i32) {
        match self {
            Self::Ptr(f) => f(iteration),
            Self::Shared(f) => f.call_test(iteration),
        }
    }
}

impl<F> From<F> for TestFnHandle
where
    F: TestFn + Send + Sync + RefUnwindSafe + 'static,
{
    fn from(value: F) -> Self {
        TestFnHandle::Shared(Arc::new(value))
    }
}

#[derive(Clone)]
#[non_exhaustive]
pub enum HookFnHandle {
    Ptr(fn()),
    Shared(Arc<dyn HookFn + Send + Sync + RefUnwindSafe>),
}

impl Debug for HookFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Shared(_) => write!(f, "Shared(...)"),
        }
    }
}

impl HookFnHandle {
    pub const fn from_const_fn(f: fn()) -> Self {
        Self::Ptr(f)
    }

    pub fn call(&self) {
        match self {
            Self::Ptr(f) => f(),
            Self::Shared(f) => f.call_hook(),
        }
    }
}

impl<F> From<F> for HookFnHandle
where
    F: HookFn + Send + Sync + RefUnwindSafe + 'static,
{
    fn from(value: F) -> Self {
        HookFnHandle::Shared(Arc::new(value))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI32, Ordering};

    use super::*;

    static LAST: AtomicI32 = AtomicI32::new(-1);

    fn remember(iteration: i32) {
        LAST.store(iteration, Ordering::SeqCst);
    }

    #[test]
    fn ptr_and_shared_handles_forward_the_iteration() {
        TestFnHandle::from_const_fn(remember).call(4);
        assert_eq!(LAST.load(Ordering::SeqCst), 4);

        let seen = Arc::new(AtomicI32::new(0));
        let handle = {
            let seen = Arc::clone(&seen);
            TestFnHandle::from_shared(move |i| seen.store(i * 10, Ordering::SeqCst))
        };
        handle.call(3);
        assert_eq!(seen.load(Ordering::SeqCst), 30);
    }

    #[test]
    fn debug_hides_closures() {
        let handle = HookFnHandle::from(|| ());
        assert_eq!(format!("{handle:?}"), "Shared(...)");
    }
}
