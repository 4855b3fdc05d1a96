//! Style id → routing strategy factory registry.
//!
//! New routing styles can be registered at runtime without touching the
//! built-in strategies or this module. Lookup failures never propagate to
//! the caller: an unrecognized id, like a failing factory, degrades to
//! straight routing with a logged warning, so the edge always stays
//! renderable.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::router::ConnectorRouter;
use crate::routers::{CurvedRouter, ElbowRouter, SegmentedRouter, StraightRouter};

/// Built-in style ids.
pub const STRAIGHT: &str = "straight";
pub const ELBOW: &str = "elbow";
pub const CURVED: &str = "curved";
pub const SEGMENTED: &str = "segmented";

/// Constructs a fresh strategy instance for one style. Factories may fail;
/// the registry absorbs the failure.
pub type ConnectorFactory = fn() -> Result<Box<dyn ConnectorRouter>>;

#[derive(Debug, Clone, Default)]
pub struct ConnectorRegistry {
    factories: FxHashMap<String, ConnectorFactory>,
}

impl ConnectorRegistry {
    /// An empty registry. Most hosts want [`with_builtin_styles`] instead.
    ///
    /// [`with_builtin_styles`]: ConnectorRegistry::with_builtin_styles
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the four built-in styles bound.
    pub fn with_builtin_styles() -> Self {
        let mut reg = Self::new();
        reg.register(STRAIGHT, || Ok(Box::new(StraightRouter::new())));
        reg.register(ELBOW, || Ok(Box::new(ElbowRouter::new())));
        reg.register(CURVED, || Ok(Box::new(CurvedRouter::new())));
        reg.register(SEGMENTED, || Ok(Box::new(SegmentedRouter::new())));
        reg
    }

    /// Binds `style` to `factory`, replacing any previous binding.
    pub fn register(&mut self, style: impl Into<String>, factory: ConnectorFactory) {
        self.factories.insert(style.into(), factory);
    }

    /// Whether a factory is bound for `style`.
    pub fn contains(&self, style: &str) -> bool {
        self.factories.contains_key(style)
    }

    /// Registered style ids, in no particular order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Constructs a strategy for `style`, degrading to [`StraightRouter`] on
    /// an unknown id or a failing factory. Never fails.
    pub fn create(&self, style: &str) -> Box<dyn ConnectorRouter> {
        match self.try_create(style) {
            Ok(router) => router,
            Err(err) => {
                tracing::warn!(style, error = %err, "falling back to straight routing");
                Box::new(StraightRouter::new())
            }
        }
    }

    /// Like [`create`] but surfaces the degradation cause instead of logging.
    ///
    /// [`create`]: ConnectorRegistry::create
    pub fn try_create(&self, style: &str) -> Result<Box<dyn ConnectorRouter>> {
        let factory = self.factories.get(style).ok_or_else(|| Error::UnknownStyle {
            style: style.to_string(),
        })?;
        factory().map_err(|err| match err {
            Error::Construction { .. } => err,
            other => Error::Construction {
                style: style.to_string(),
                message: other.to_string(),
            },
        })
    }
}
