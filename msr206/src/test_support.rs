//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic. `SharedMock` exists
//! because a `Device` owns its transport: tests keep a clone of the handle
//! to queue responses after initialization and to inspect sent frames.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::device::{Device, ExchangeConfig, Initialized};
use crate::transport::{MockTransport, Transport};
use crate::utils::ms;
use crate::Result;

/// Cloneable view onto one MockTransport. Every clone shares the same
/// queue and sent-frame log.
#[derive(Clone, Debug, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    /// Fresh shared mock with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one response chunk.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    /// Queue a response split into fixed-size chunks.
    pub fn push_chunked(&self, resp: &[u8], chunk_len: usize) {
        self.inner.borrow_mut().push_chunked(resp, chunk_len);
    }

    /// Snapshot of every frame sent so far, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    /// The most recently sent frame, if any.
    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.inner.borrow().sent.last().cloned()
    }

    /// Whether `close` has been called on the transport.
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(max_len, timeout)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// Exchange configuration with a short idle window so drain loops finish
/// quickly against a mock.
#[doc(hidden)]
pub fn fast_config() -> ExchangeConfig {
    ExchangeConfig::with_idle_window(ms(50))
}

/// Convenience: create and initialize a `Device<Initialized>` backed by a
/// clone of the given shared mock, using the fast test configuration.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &SharedMock) -> Result<Device<Initialized>> {
    Device::new_with_transport(Box::new(mock.clone()))
        .with_config(fast_config())
        .initialize()
}
