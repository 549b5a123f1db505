use crate::{
    engine::bubble::{Bubble, BubbleId, BubbleView, Snapshot},
    engine::config::{
        DEPTH_BASE, DEPTH_SPREAD, DRIFT_INTERVAL_MAX_MS, DRIFT_INTERVAL_MIN_MS, EngineConfig,
        MIN_EXPIRY_DELAY_MS, MOBILE_BREAKPOINT_PX, POP_DURATION_MS,
    },
    engine::media::{MediaItem, MediaKind},
    engine::placement::{self, PlacedCircle},
    engine::timers::{DueTimer, TimerKind, TimerTable},
    foundation::core::{Millis, Viewport},
    foundation::error::BubbleResult,
    foundation::rng::Rng64,
};

/// Owns the active bubble set and drives its whole lifecycle: spawning up to
/// capacity, expiry, pop-and-replace, periodic drift.
///
/// The engine is presentation-agnostic and wall-clock-free. The hosting layer
/// supplies the viewport, the media pool and a `now` timestamp on every call,
/// and reads back [`Snapshot`]s to draw. All mutation happens on this single
/// serialized path; there is no interior concurrency.
pub struct BubbleEngine {
    cfg: EngineConfig,
    pool: Vec<MediaItem>,
    viewport: Viewport,
    rng: Rng64,
    next_id: u64,
    bubbles: Vec<Bubble>,
    timers: TimerTable,
}

impl BubbleEngine {
    /// Create an engine and spawn the initial set up to capacity.
    pub fn new(
        cfg: EngineConfig,
        pool: Vec<MediaItem>,
        viewport: Viewport,
        seed: u64,
        now: Millis,
    ) -> BubbleResult<Self> {
        cfg.validate()?;
        let mut engine = Self {
            cfg,
            pool,
            viewport,
            rng: Rng64::new(seed),
            next_id: 1,
            bubbles: Vec::new(),
            timers: TimerTable::default(),
        };
        engine.spawn_until_capacity(now);
        Ok(engine)
    }

    /// Capacity for the current viewport class.
    pub fn capacity(&self) -> usize {
        if self.is_mobile() {
            self.cfg.capacity_mobile
        } else {
            self.cfg.capacity_desktop
        }
    }

    fn is_mobile(&self) -> bool {
        self.viewport.width < MOBILE_BREAKPOINT_PX
    }

    /// Number of non-popping bubbles.
    pub fn active_count(&self) -> usize {
        self.bubbles.iter().filter(|b| !b.popping).count()
    }

    /// The full bubble set, popping bubbles included, in creation order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// The viewport the engine currently places against.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Uniform draw from the pool, excluding videos on mobile-class
    /// viewports. `None` when the (filtered) pool is empty.
    fn select_content(&mut self) -> Option<MediaItem> {
        let mobile = self.is_mobile();
        let eligible: Vec<&MediaItem> = self
            .pool
            .iter()
            .filter(|m| !mobile || m.kind != MediaKind::Video)
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let idx = self.rng.index(eligible.len());
        Some(eligible[idx].clone())
    }

    /// Place and register one bubble. `None` when content selection fails.
    fn spawn_one(&mut self, now: Millis) -> Option<BubbleId> {
        let content = self.select_content()?;

        // Every bubble currently on screen (popping included) feeds the
        // overlap check, so a batch of spawns also avoids itself.
        let context: Vec<PlacedCircle> = self
            .bubbles
            .iter()
            .map(|b| PlacedCircle {
                center: b.center(),
                radius: b.radius(),
            })
            .collect();
        let placed = placement::place(&self.cfg, self.viewport, &mut self.rng, &context);

        let id = BubbleId(self.next_id);
        self.next_id += 1;
        let depth = DEPTH_BASE + (self.rng.next_f64_01() * f64::from(DEPTH_SPREAD)) as i32;
        let lifespan_ms = match content.kind {
            MediaKind::Image => Some(self.cfg.image_lifespan_ms),
            MediaKind::Video => None,
        };

        self.bubbles.push(Bubble {
            id,
            media: content,
            size_fraction: placed.size_fraction,
            size_px: placed.size_px,
            left: placed.left,
            top: placed.top,
            depth,
            created_at: now,
            lifespan_ms,
            popping: false,
        });
        tracing::debug!(id = id.0, count = self.bubbles.len(), "bubble spawned");
        Some(id)
    }

    /// Spawn until the active count reaches capacity, then re-arm timers.
    /// Stops early when content selection fails (empty pool).
    #[tracing::instrument(skip(self))]
    pub fn spawn_until_capacity(&mut self, now: Millis) {
        while self.active_count() < self.capacity() {
            if self.spawn_one(now).is_none() {
                break;
            }
        }
        self.rebuild_expiries(now);
        self.ensure_drift(now);
    }

    /// Apply a viewport change: truncate the set to the new capacity (excess
    /// bubbles are dropped outright, without a pop animation), then backfill.
    #[tracing::instrument(skip(self))]
    pub fn set_viewport(&mut self, viewport: Viewport, now: Millis) {
        self.viewport = viewport;
        let cap = self.capacity();
        if self.bubbles.len() > cap {
            for dropped in self.bubbles.drain(cap..) {
                self.timers.cancel(dropped.id);
                tracing::debug!(id = dropped.id.0, "bubble dropped on resize");
            }
        }
        self.spawn_until_capacity(now);
    }

    /// Replace the media pool; a previously-empty engine backfills.
    pub fn set_media_pool(&mut self, pool: Vec<MediaItem>, now: Millis) {
        self.pool = pool;
        self.spawn_until_capacity(now);
    }

    /// Start the pop animation for one bubble. Idempotent by id: popping or
    /// absent bubbles (stale triggers included) are a no-op.
    #[tracing::instrument(skip(self))]
    pub fn pop(&mut self, id: BubbleId, now: Millis) {
        let Some(bubble) = self.bubbles.iter_mut().find(|b| b.id == id) else {
            return;
        };
        if bubble.popping {
            return;
        }
        bubble.popping = true;
        self.timers
            .arm(id, TimerKind::PopComplete, now.add(POP_DURATION_MS));
        tracing::debug!(id = id.0, "bubble popping");
    }

    /// Fix a video bubble's lifespan once the playback layer reports the
    /// true duration, and arm its expiry. Ignored for images, popping
    /// bubbles, already-fixed lifespans and unknown ids.
    pub fn media_duration_known(&mut self, id: BubbleId, duration_ms: u64, now: Millis) {
        let Some(bubble) = self.bubbles.iter_mut().find(|b| b.id == id) else {
            return;
        };
        if !bubble.is_video() || bubble.popping || bubble.lifespan_ms.is_some() {
            return;
        }
        bubble.lifespan_ms = Some(duration_ms);
        let due = expiry_due(bubble, now);
        self.timers.arm(id, TimerKind::Expiry, due);
    }

    /// Drain every due timer at `now`, in deadline order.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, now: Millis) {
        while let Some(due) = self.timers.pop_due(now) {
            match due {
                DueTimer::Bubble(id, TimerKind::Expiry) => self.pop(id, now),
                DueTimer::Bubble(id, TimerKind::PopComplete) => self.finish_pop(id, now),
                DueTimer::Drift => self.drift(now),
            }
        }
    }

    /// Cancel every outstanding timer. The hosting layer calls this on
    /// unmount so nothing fires against a torn-down component.
    pub fn shutdown(&mut self) {
        self.timers.clear();
    }

    /// Current render contract, in painter's order (back to front).
    pub fn snapshot(&self) -> Snapshot {
        let mut views: Vec<BubbleView> = self
            .bubbles
            .iter()
            .map(|b| BubbleView {
                id: b.id,
                kind: b.media.kind,
                source: b.media.source.clone(),
                left: b.left,
                top: b.top,
                size_px: b.size_px,
                size_fraction: b.size_fraction,
                depth: b.depth,
                popping: b.popping,
            })
            .collect();
        views.sort_by_key(|v| (v.depth, v.id));
        Snapshot {
            bubbles: views,
            opacity: self.cfg.opacity,
        }
    }

    /// Remove a popped bubble and, when the pool allows and the set is under
    /// capacity, synchronously spawn exactly one replacement against the
    /// post-removal overlap context.
    fn finish_pop(&mut self, id: BubbleId, now: Millis) {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| b.id != id);
        if self.bubbles.len() == before {
            return;
        }
        tracing::debug!(id = id.0, count = self.bubbles.len(), "bubble removed");
        if self.active_count() < self.capacity() {
            let _ = self.spawn_one(now);
        }
        self.rebuild_expiries(now);
        self.ensure_drift(now);
    }

    /// Reposition every bubble at once, honoring the viewport-fit constraint
    /// but not the separation policy (a deliberate relaxation), then redraw
    /// the next drift interval.
    fn drift(&mut self, now: Millis) {
        let vp = self.viewport;
        for b in &mut self.bubbles {
            b.size_px = b.size_fraction * vp.width;
            let (left, top) = placement::fit_position(vp, b.size_px, &mut self.rng);
            b.left = left;
            b.top = top;
        }
        self.ensure_drift(now);
    }

    /// Re-arming rule: whenever the active set changes, expiry deadlines are
    /// invalidated and recomputed from bubble state, so no stale timer can
    /// reference a removed bubble. In-flight pop-complete timers survive.
    fn rebuild_expiries(&mut self, now: Millis) {
        self.timers.clear_expiries();
        for b in &self.bubbles {
            if b.popping || b.lifespan_ms.is_none() {
                continue;
            }
            self.timers.arm(b.id, TimerKind::Expiry, expiry_due(b, now));
        }
    }

    /// Keep exactly one drift deadline armed while bubbles exist.
    fn ensure_drift(&mut self, now: Millis) {
        if self.bubbles.is_empty() {
            self.timers.cancel_drift();
        } else if !self.timers.drift_armed() {
            let interval = self
                .rng
                .in_range(DRIFT_INTERVAL_MIN_MS as f64, DRIFT_INTERVAL_MAX_MS as f64)
                as u64;
            self.timers.arm_drift(now.add(interval));
        }
    }
}

/// Expiry deadline for one bubble: remaining lifespan from `now`, clamped so
/// the pop never fires sooner than [`MIN_EXPIRY_DELAY_MS`] out.
fn expiry_due(bubble: &Bubble, now: Millis) -> Millis {
    let lifespan = bubble.lifespan_ms.unwrap_or(0);
    let remaining = lifespan.saturating_sub(now.since(bubble.created_at));
    now.add(remaining.max(MIN_EXPIRY_DELAY_MS))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
