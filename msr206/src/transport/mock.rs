// msr206/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::Result;
use crate::transport::traits::Transport;

/// Mock transport for unit tests. It records sent frames and serves queued
/// response bytes.
///
/// Queued responses are delivered in order, sliced to the caller's
/// `max_len` so tests can exercise multi-chunk accumulation. An exhausted
/// queue yields empty reads, which is exactly what an idle device looks
/// like to the drain loop.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames passed to `send`, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Pending response chunks
    pub responses: VecDeque<Vec<u8>>,
    /// Set once `close` has been called
    pub closed: bool,
}

impl MockTransport {
    /// Empty mock: no queued responses, nothing sent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one response chunk.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue a response split into fixed-size chunks, to exercise the
    /// accumulation path.
    pub fn push_chunked(&mut self, resp: &[u8], chunk_len: usize) {
        for chunk in resp.chunks(chunk_len.max(1)) {
            self.responses.push_back(chunk.to_vec());
        }
    }

    /// Pop the most recently sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, max_len: usize, _timeout: Duration) -> Result<Vec<u8>> {
        match self.responses.pop_front() {
            None => Ok(Vec::new()),
            Some(mut chunk) => {
                if chunk.len() > max_len {
                    // Hand back the front slice and requeue the rest.
                    let rest = chunk.split_off(max_len);
                    self.responses.push_front(rest);
                }
                Ok(chunk)
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
