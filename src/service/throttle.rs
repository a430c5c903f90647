//! Rate limiting for the verify command.
//!
//! Sliding-window cooldowns of 2 attempts per 60 s per user and 6 per 60 s
//! per guild, plus a hard ceiling of 3 simultaneous in-flight verifications
//! per guild. Excess attempts are rejected immediately, never queued. The
//! in-flight slot is released when the returned guard drops.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use thiserror::Error;

const USER_LIMIT: usize = 2;
const GUILD_LIMIT: usize = 6;
const WINDOW: Duration = Duration::from_secs(60);
const MAX_IN_FLIGHT: u32 = 3;

/// Why an attempt was rejected. Rendered as a soft warning, not a failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThrottleError {
    /// A cooldown bucket is full; retry once the window slides.
    #[error("command is on cooldown, retry in {} seconds", retry_after.as_secs().max(1))]
    Cooldown {
        /// Time until the oldest counted attempt leaves the window.
        retry_after: Duration,
    },

    /// The guild already has the maximum number of verifications in flight.
    #[error("too many verifications in progress for this guild")]
    ConcurrencyExceeded,
}

#[derive(Default)]
struct ThrottleState {
    user_hits: HashMap<u64, Vec<Instant>>,
    guild_hits: HashMap<u64, Vec<Instant>>,
    in_flight: HashMap<u64, u32>,
}

/// Shared throttle over all verification attempts.
pub struct CommandThrottle {
    state: Mutex<ThrottleState>,
}

impl CommandThrottle {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ThrottleState::default()),
        }
    }

    /// Tries to reserve a verification slot for the given guild and user.
    ///
    /// A rejected attempt consumes no cooldown budget. On success the
    /// returned guard holds one of the guild's in-flight slots until dropped.
    pub fn acquire(
        self: &Arc<Self>,
        guild_id: u64,
        user_id: u64,
    ) -> Result<ThrottleGuard, ThrottleError> {
        self.acquire_at(guild_id, user_id, Instant::now())
    }

    fn acquire_at(
        self: &Arc<Self>,
        guild_id: u64,
        user_id: u64,
        now: Instant,
    ) -> Result<ThrottleGuard, ThrottleError> {
        let mut state = self.lock_state();

        let user_retry = bucket_retry(state.user_hits.entry(user_id).or_default(), USER_LIMIT, now);
        if let Some(retry_after) = user_retry {
            return Err(ThrottleError::Cooldown { retry_after });
        }

        let guild_retry = bucket_retry(
            state.guild_hits.entry(guild_id).or_default(),
            GUILD_LIMIT,
            now,
        );
        if let Some(retry_after) = guild_retry {
            return Err(ThrottleError::Cooldown { retry_after });
        }

        let in_flight = state.in_flight.entry(guild_id).or_insert(0);
        if *in_flight >= MAX_IN_FLIGHT {
            return Err(ThrottleError::ConcurrencyExceeded);
        }
        *in_flight += 1;

        // All checks passed; only now does the attempt count against the
        // cooldown windows.
        state.user_hits.entry(user_id).or_default().push(now);
        state.guild_hits.entry(guild_id).or_default().push(now);

        Ok(ThrottleGuard {
            throttle: Arc::clone(self),
            guild_id,
        })
    }

    fn release(&self, guild_id: u64) {
        let mut state = self.lock_state();
        if let Some(count) = state.in_flight.get_mut(&guild_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                state.in_flight.remove(&guild_id);
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ThrottleState> {
        // A poisoned lock only means another attempt panicked; the counters
        // are still coherent.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for CommandThrottle {
    fn default() -> Self {
        Self::new()
    }
}

/// Prunes expired hits from a bucket and, when the bucket is full, returns
/// how long until its oldest hit leaves the window.
fn bucket_retry(hits: &mut Vec<Instant>, limit: usize, now: Instant) -> Option<Duration> {
    hits.retain(|hit| now.duration_since(*hit) < WINDOW);

    if hits.len() >= limit {
        let oldest = hits[0];
        Some(WINDOW - now.duration_since(oldest))
    } else {
        None
    }
}

/// Holds one in-flight verification slot; dropping it releases the slot.
pub struct ThrottleGuard {
    throttle: Arc<CommandThrottle>,
    guild_id: u64,
}

impl Drop for ThrottleGuard {
    fn drop(&mut self) {
        self.throttle.release(self.guild_id);
    }
}
