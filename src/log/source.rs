//! Derives a human-readable label for whatever value a log call names as
//! its origin.
//!
//! The caller surface is capability-based: a source is only ever inspected
//! through [`LogSource`], so the core stays agnostic of the host engine's
//! concrete object types.

/// A service that knows its own name and version.
pub trait NamedService {
    fn name(&self) -> &str;
    fn version(&self) -> &str;
}

/// An engine-native object with a context-locatable identity.
///
/// Implemented by the host-collaborator layer; when a log source exposes
/// this capability, the object is forwarded to the console sink so the host
/// tooling can offer click-to-locate.
pub trait EngineObject {
    /// Name assigned to the object in the host scene/hierarchy.
    fn object_name(&self) -> &str;
}

/// Capability surface inspected when deriving a source label.
///
/// Every probe defaults to `None`; implementors opt in to whichever
/// capabilities apply. [`name_of`] checks them in a fixed order.
pub trait LogSource {
    /// The source is a named, versioned service.
    fn as_service(&self) -> Option<&dyn NamedService> {
        None
    }

    /// The source is plain text.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// The source is an engine-native object.
    fn as_engine_object(&self) -> Option<&dyn EngineObject> {
        None
    }

    /// The source is a type descriptor (full type path).
    fn as_type_descriptor(&self) -> Option<&'static str> {
        None
    }

    /// Fallback label when no capability matches.
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl LogSource for &str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl LogSource for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Absent sources resolve to the literal `"Unknown"`.
impl<S: LogSource> LogSource for Option<S> {
    fn as_service(&self) -> Option<&dyn NamedService> {
        self.as_ref().and_then(LogSource::as_service)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(LogSource::as_text)
    }

    fn as_engine_object(&self) -> Option<&dyn EngineObject> {
        self.as_ref().and_then(LogSource::as_engine_object)
    }

    fn as_type_descriptor(&self) -> Option<&'static str> {
        self.as_ref().and_then(LogSource::as_type_descriptor)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(source) => source.type_name(),
            None => "Unknown",
        }
    }
}

/// Log-source stand-in for a type rather than a value.
///
/// Logs under the type's short name: `TypeDescriptor::of::<sdp::Origin>()`
/// yields the label `Origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor(&'static str);

impl TypeDescriptor {
    #[must_use]
    pub fn of<T>() -> Self {
        Self(std::any::type_name::<T>())
    }

    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.0)
    }
}

impl LogSource for TypeDescriptor {
    fn as_type_descriptor(&self) -> Option<&'static str> {
        Some(self.0)
    }
}

/// Resolves the display label for a source.
///
/// First match wins, and the order is fixed: a value exposing several
/// capabilities at once always resolves through the earliest rule.
///
/// 1. Named versioned service → `"{name} v{version}"`
/// 2. Plain text → unchanged
/// 3. Engine object → its scene name
/// 4. Type descriptor → short type name
/// 5. Fallback → runtime type name, or `"Unknown"` for an absent source
#[must_use]
pub fn name_of<S: LogSource>(source: &S) -> String {
    if let Some(service) = source.as_service() {
        return format!("{} v{}", service.name(), service.version());
    }
    if let Some(text) = source.as_text() {
        return text.to_string();
    }
    if let Some(object) = source.as_engine_object() {
        return object.object_name().to_string();
    }
    if let Some(full) = source.as_type_descriptor() {
        return short_type_name(full).to_string();
    }
    source.type_name().to_string()
}

/// Last path segment of a full type name, generic arguments stripped.
fn short_type_name(full: &'static str) -> &'static str {
    let head = match full.find('<') {
        Some(open) => &full[..open],
        None => full,
    };
    match head.rfind("::") {
        Some(sep) => &head[sep + 2..],
        None => head,
    }
}
