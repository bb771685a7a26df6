use regex::Regex;

/// The closed set of kinds a schema field can have.
///
/// Every consumer of this type must match it exhaustively, so adding a
/// variant forces every conversion and validation site to handle it.
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// A real number.
    Number,
    /// A free-form string.
    Text,
    /// A string restricted to a fixed set of values.
    Enum(Vec<String>),
    /// An array of arbitrary items.
    List,
    /// A boolean flag.
    Boolean,
}

/// A single named field of an [`ObjectSchema`](crate::ObjectSchema).
///
/// Constraints that don't apply to the field's kind are simply never
/// checked; the builder methods exist on every field so that schema
/// declarations read uniformly.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) kind: FieldKind,
    pub(crate) description: Option<String>,
    pub(crate) optional: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) min_len: Option<usize>,
    pub(crate) pattern: Option<Regex>,
}

impl Field {
    #[inline]
    fn with_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            description: None,
            optional: false,
            min: None,
            max: None,
            min_len: None,
            pattern: None,
        }
    }

    /// Declares a real-number field.
    #[inline]
    pub fn number() -> Self {
        Self::with_kind(FieldKind::Number)
    }

    /// Declares a free-form string field.
    #[inline]
    pub fn text() -> Self {
        Self::with_kind(FieldKind::Text)
    }

    /// Declares a string field restricted to the given values.
    #[inline]
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants = variants.into_iter().map(Into::into).collect();
        Self::with_kind(FieldKind::Enum(variants))
    }

    /// Declares an array field.
    #[inline]
    pub fn list() -> Self {
        Self::with_kind(FieldKind::List)
    }

    /// Declares a boolean field.
    #[inline]
    pub fn boolean() -> Self {
        Self::with_kind(FieldKind::Boolean)
    }

    /// Attaches a human-readable description, carried into the derived
    /// descriptor property.
    #[inline]
    pub fn describe<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field as optional. Optional fields may be absent from
    /// a validated value and are left out of the required list.
    #[inline]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets an inclusive lower bound for number fields.
    #[inline]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets an inclusive upper bound for number fields.
    #[inline]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets a minimum length, in characters, for text fields.
    #[inline]
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Requires text fields to match the given pattern.
    #[inline]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
