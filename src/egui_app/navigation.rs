//! Router with delayed navigation
//!
//! Forms hand back a [`Redirect`] on success; the router keeps at most one
//! scheduled redirect and performs it once its deadline passes. Any explicit
//! navigation cancels the scheduled one.

use std::time::{Duration, Instant};

use crate::egui_app::types::Route;

/// Navigate to `route` after `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub delay: Duration,
}

impl Redirect {
    pub fn after_millis(route: Route, millis: u64) -> Self {
        Self {
            route,
            delay: Duration::from_millis(millis),
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    route: Route,
    due: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    scheduled: Option<Scheduled>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            scheduled: None,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Switch immediately. Returns the route that was left.
    pub fn navigate(&mut self, route: Route) -> Route {
        if self.scheduled.take().is_some() {
            tracing::debug!("[NAV] Scheduled redirect cancelled");
        }
        tracing::info!("[NAV] {} -> {}", self.current.path(), route.path());
        std::mem::replace(&mut self.current, route)
    }

    /// Replace any scheduled redirect with `redirect`, due `redirect.delay` after `now`
    pub fn schedule(&mut self, redirect: Redirect, now: Instant) {
        tracing::debug!("[NAV] Redirect to {} in {:?}", redirect.route.path(), redirect.delay);
        self.scheduled = Some(Scheduled {
            route: redirect.route,
            due: now + redirect.delay,
        });
    }

    pub fn scheduled_route(&self) -> Option<&Route> {
        self.scheduled.as_ref().map(|s| &s.route)
    }

    /// Remaining time before the scheduled redirect fires
    pub fn time_until_redirect(&self, now: Instant) -> Option<Duration> {
        self.scheduled
            .as_ref()
            .map(|s| s.due.saturating_duration_since(now))
    }

    /// Pop the scheduled route if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<Route> {
        let due = self.scheduled.as_ref().is_some_and(|s| now >= s.due);
        if !due {
            return None;
        }
        self.scheduled.take().map(|s| s.route)
    }
}
