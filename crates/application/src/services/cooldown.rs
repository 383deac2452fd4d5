//! Per-user cooldown and rate-limit bookkeeping
//!
//! Both structures are read-then-written inside a single synchronous
//! critical section. Nothing here may await: the admission decision must
//! stay atomic relative to the provider call's suspension point.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use domain::UserId;
use parking_lot::Mutex;

/// Convert a remaining duration into whole seconds, rounding up
///
/// A user 4.2 s from expiry is told to wait 5 more seconds.
#[must_use]
pub fn remaining_whole_seconds(remaining: Duration) -> u64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        remaining.as_millis().div_ceil(1000) as u64
    }
}

/// Per-user cooldown map with lazy eviction
///
/// At most one entry exists per user; a user without an entry is not on
/// cooldown. Expired entries are pruned whenever the map is consulted, so
/// no removal timer is needed for correctness.
#[derive(Debug)]
pub struct CooldownTracker {
    entries: Mutex<HashMap<UserId, Instant>>,
    duration: Duration,
}

impl CooldownTracker {
    /// Create a tracker enforcing the given delay between invocations
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            duration,
        }
    }

    /// Admit or reject a user, arming a fresh cooldown on admission
    ///
    /// Returns `Err(remaining)` while the user's previous cooldown is
    /// still active; the existing entry is left untouched. On admission
    /// the new entry expires `duration` from now.
    pub fn check_and_arm(&self, user: UserId) -> Result<(), Duration> {
        self.check_and_arm_at(user, Instant::now())
    }

    /// `check_and_arm` against an explicit clock reading
    pub fn check_and_arm_at(&self, user: UserId, now: Instant) -> Result<(), Duration> {
        let mut entries = self.entries.lock();

        // Lazy eviction: drop everything already expired
        entries.retain(|_, expires_at| *expires_at > now);

        if let Some(expires_at) = entries.get(&user) {
            return Err(*expires_at - now);
        }

        entries.insert(user, now + self.duration);
        Ok(())
    }

    /// Number of live (possibly expired, not yet evicted) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no entries are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// Token bucket entry for a single user
#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(max_tokens: f64, now: Instant) -> Self {
        Self {
            tokens: max_tokens,
            last_update: now,
        }
    }

    /// Try to consume a token, returning true if allowed
    fn try_consume(&mut self, now: Instant, tokens_per_second: f64, max_tokens: f64) -> bool {
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill tokens based on elapsed time
        self.tokens = elapsed
            .mul_add(tokens_per_second, self.tokens)
            .min(max_tokens);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Per-user token bucket rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<UserId, TokenBucket>>,
    tokens_per_second: f64,
    max_tokens: f64,
}

impl RateLimiter {
    /// Allow up to `max_requests` per `window` for each user
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        let max_tokens = f64::from(max_requests);
        Self {
            buckets: Mutex::new(HashMap::new()),
            tokens_per_second: max_tokens / window.as_secs_f64(),
            max_tokens,
        }
    }

    /// Check if a request from the given user is allowed
    pub fn check(&self, user: UserId) -> bool {
        self.check_at(user, Instant::now())
    }

    /// `check` against an explicit clock reading
    pub fn check_at(&self, user: UserId, now: Instant) -> bool {
        let mut buckets = self.buckets.lock();

        // A bucket idle long enough to have fully refilled is
        // indistinguishable from no bucket at all, so drop it
        let idle_ttl = Duration::from_secs_f64(self.max_tokens / self.tokens_per_second);
        buckets.retain(|_, bucket| now.saturating_duration_since(bucket.last_update) < idle_ttl);

        let bucket = buckets
            .entry(user)
            .or_insert_with(|| TokenBucket::new(self.max_tokens, now));

        bucket.try_consume(now, self.tokens_per_second, self.max_tokens)
    }

    /// Number of users with a live bucket
    #[must_use]
    pub fn tracked_users(&self) -> usize {
        self.buckets.lock().len()
    }
}
