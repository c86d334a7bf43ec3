// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;

/// Route showing calendars and their events.
pub const ROUTE_CALENDARS: &str = "/dashboard/calendars";

/// Route listing event types.
pub const ROUTE_EVENT_TYPES: &str = "/dashboard/event-types";

/// Route listing lecture summaries.
pub const ROUTE_LECTURE_SUMMARIES: &str = "/dashboard/lecture-summaries";

/// Tells the presentation layer that cached views of a route are stale.
///
/// Fire-and-forget: implementations must not fail and are not consulted for
/// correctness.
pub trait Invalidator: Debug + Send + Sync {
    /// Marks the given route as stale.
    fn invalidate(&self, route: &str);
}

/// Records invalidations as `tracing` events only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingInvalidator;

impl Invalidator for TracingInvalidator {
    fn invalidate(&self, route: &str) {
        tracing::debug!(route, "route invalidated");
    }
}
