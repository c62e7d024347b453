use std::time::Instant;

use crate::event::RequestId;

/// Start time stamped onto one outgoing request.
///
/// The annotation moves with the request's own future and is consumed by
/// [`RequestTiming::finish`], so each request yields exactly one elapsed
/// measurement and overlapping requests never share a clock.
#[derive(Debug)]
#[must_use = "a request timing must be finished to produce an elapsed time"]
pub struct RequestTiming {
    id: RequestId,
    started_at: Instant,
}

impl RequestTiming {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Milliseconds since the request was sent.
    pub fn finish(self) -> u64 {
        let elapsed = self.started_at.elapsed().as_millis() as u64;
        log::debug!("request {} finished after {}ms", self.id, elapsed);
        elapsed
    }
}

/// Request/response hook pair around every dispatch.
pub trait Interceptor: Send + Sync {
    /// Called right before the request goes out.
    fn on_request(&self, id: RequestId) -> RequestTiming;

    /// Called once the response or the error is in hand.
    fn on_complete(&self, timing: RequestTiming) -> u64 {
        timing.finish()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimingInterceptor;

impl Interceptor for TimingInterceptor {
    fn on_request(&self, id: RequestId) -> RequestTiming {
        RequestTiming { id, started_at: Instant::now() }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_timing_is_scoped_per_request() {
        let interceptor = TimingInterceptor;
        let slow = interceptor.on_request(Uuid::new_v4());
        std::thread::sleep(Duration::from_millis(30));
        let fast = interceptor.on_request(Uuid::new_v4());
        assert_ne!(slow.id(), fast.id());

        let fast_ms = interceptor.on_complete(fast);
        let slow_ms = interceptor.on_complete(slow);
        assert!(slow_ms >= 30);
        assert!(slow_ms >= fast_ms);
    }
}
