//! Typed component custom ids.
//!
//! Wire format: `route:action:token[:extra]`, ASCII, bounded by Discord's
//! 100-char custom-id limit. Parsing happens exactly once, at the router
//! boundary; handlers receive the decoded [`CustomId`] and never touch the
//! raw string.

// Route keys: the first segment of every component custom id.
pub const ROUTE_MULTI: &str = "multi";
pub const ROUTE_WISH: &str = "wish";
pub const ROUTE_NUKE: &str = "nuke";
pub const ROUTE_LEVEL: &str = "level";
pub const ROUTE_REMINDER: &str = "reminder";

// Shared pagination actions.
pub const ACTION_PREV: &str = "prev";
pub const ACTION_NEXT: &str = "next";

// Panel actions.
pub const ACTION_ADD: &str = "add";
pub const ACTION_REMOVE: &str = "remove";
pub const ACTION_REFRESH: &str = "refresh";
pub const ACTION_END: &str = "end";
pub const ACTION_UP: &str = "up";
pub const ACTION_DOWN: &str = "down";

// Reminder notification actions.
pub const ACTION_SNOOZE: &str = "snooze";
pub const ACTION_DISMISS: &str = "dismiss";

/// A decoded component or modal custom id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomId {
    pub route: String,
    pub action: String,
    pub token: String,
    pub extra: Option<String>,
}

impl CustomId {
    pub fn new(route: &str, action: &str, token: &str) -> Self {
        Self {
            route: route.to_string(),
            action: action.to_string(),
            token: token.to_string(),
            extra: None,
        }
    }

    pub fn with_extra(route: &str, action: &str, token: &str, extra: &str) -> Self {
        Self {
            extra: Some(extra.to_string()),
            ..Self::new(route, action, token)
        }
    }

    /// Encode back to the wire form. Tokens are truncated at creation, so the
    /// result stays inside the platform bound; the assert documents that.
    pub fn encode(&self) -> String {
        let mut out = format!("{}:{}:{}", self.route, self.action, self.token);
        if let Some(extra) = &self.extra {
            out.push(':');
            out.push_str(extra);
        }
        debug_assert!(out.len() <= 100, "custom id exceeds Discord's bound: {out}");
        out
    }

    /// Decode a raw custom id. `None` for anything that does not carry all
    /// three mandatory segments; the router ignores those silently so stale
    /// buttons on old messages never surface errors.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(4, ':');
        let route = parts.next()?;
        let action = parts.next()?;
        let token = parts.next()?;
        if route.is_empty() || action.is_empty() || token.is_empty() {
            return None;
        }
        Some(Self {
            route: route.to_string(),
            action: action.to_string(),
            token: token.to_string(),
            extra: parts.next().filter(|s| !s.is_empty()).map(str::to_string),
        })
    }
}

/// Shorthand used by render code building component ids.
pub fn component_id(route: &str, action: &str, token: &str) -> String {
    CustomId::new(route, action, token).encode()
}
