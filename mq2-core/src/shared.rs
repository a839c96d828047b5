//! Thread-safe handle around one driver
//!
//! [`Mq2`] has no internal locking. `SharedMq2` puts it behind a mutex so
//! several threads can request readings; each call holds the lock for the
//! whole blocking window, so operations never interleave samples.

use std::sync::{Arc, Mutex, MutexGuard};

use embedded_hal::delay::DelayNs;

use crate::{
    curves::GasType,
    errors::{SensorError, SensorResult},
    sensor::{GasReadings, Mq2},
    traits::AdcReader,
};

/// Cloneable, mutex-guarded driver handle
pub struct SharedMq2<A, D> {
    inner: Arc<Mutex<Mq2<A, D>>>,
}

impl<A, D> Clone for SharedMq2<A, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, D> SharedMq2<A, D>
where
    A: AdcReader,
    D: DelayNs,
{
    /// Wrap a driver
    pub fn new(sensor: Mq2<A, D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sensor)),
        }
    }

    /// See [`Mq2::initialize`]
    pub fn initialize(&self) -> SensorResult<f32> {
        self.lock()?.initialize()
    }

    /// See [`Mq2::recalibrate`]
    pub fn recalibrate(&self) -> SensorResult<f32> {
        self.lock()?.recalibrate()
    }

    /// See [`Mq2::get_percentage`]
    pub fn get_percentage(&self, gas: GasType) -> SensorResult<f32> {
        self.lock()?.get_percentage(gas)
    }

    /// See [`Mq2::read_all`]
    pub fn read_all(&self) -> SensorResult<GasReadings> {
        self.lock()?.read_all()
    }

    /// Stored R0, if any
    pub fn baseline(&self) -> SensorResult<Option<f32>> {
        Ok(self.lock()?.baseline())
    }

    /// Run a closure with exclusive access to the driver
    pub fn with<R>(&self, f: impl FnOnce(&mut Mq2<A, D>) -> R) -> SensorResult<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Take the driver back once this is the last handle.
    ///
    /// `None` while other clones are alive.
    pub fn into_inner(self) -> Option<SensorResult<Mq2<A, D>>> {
        let mutex = Arc::try_unwrap(self.inner).ok()?;
        Some(mutex.into_inner().map_err(|_| SensorError::LockPoisoned))
    }

    fn lock(&self) -> SensorResult<MutexGuard<'_, Mq2<A, D>>> {
        self.inner.lock().map_err(|_| SensorError::LockPoisoned)
    }
}
