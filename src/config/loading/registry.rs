//! Compiled option descriptors and the process-wide table holding them.

use std::{collections::HashMap, fmt, sync::OnceLock};

use super::options;
use crate::{
    HyprconfError, Result,
    config::{
        Config,
        error::ValueError,
        values::{Bounds, Color, Gaps, Gradient, Vec2, parse_bool, parse_color, parse_float, parse_int},
    },
};

/// Reaches one field of a [`Config`].
pub type Accessor<T> = fn(&mut Config) -> &mut T;

/// Where an option is stored and how its raw value is validated.
#[derive(Clone, Copy)]
pub enum Slot {
    /// Boolean flag.
    Bool(Accessor<bool>),
    /// Integer, clamped to optional bounds.
    Int(Accessor<i64>, Option<Bounds<i64>>),
    /// Float, clamped to optional bounds.
    Float(Accessor<f32>, Option<Bounds<f32>>),
    /// Integer restricted to an enumerated set.
    Choice(Accessor<i64>, &'static [i64]),
    /// String restricted to an enumerated set.
    Keyword(Accessor<String>, &'static [&'static str]),
    /// Free-form string.
    Text(Accessor<String>),
    /// Single color.
    Color(Accessor<Color>),
    /// Color or gradient.
    Gradient(Accessor<Gradient>),
    /// CSS style four edge shorthand.
    Gaps(Accessor<Gaps>),
    /// Pair of floats.
    Vec2(Accessor<Vec2>),
}

/// Value kind of an option, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `float`
    Float,
    /// Enumerated integer
    Choice,
    /// Enumerated string
    Keyword,
    /// Free-form string
    Text,
    /// Single color
    Color,
    /// Color or gradient
    Gradient,
    /// Box shorthand
    Gaps,
    /// Float pair
    Vec2,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Bool => "bool",
            OptionKind::Int => "int",
            OptionKind::Float => "float",
            OptionKind::Choice => "choice",
            OptionKind::Keyword => "keyword",
            OptionKind::Text => "string",
            OptionKind::Color => "color",
            OptionKind::Gradient => "gradient",
            OptionKind::Gaps => "gaps",
            OptionKind::Vec2 => "vec2",
        };
        write!(f, "{name}")
    }
}

/// How an accepted value was stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// Stored as parsed.
    Set,
    /// Moved into bounds before being stored.
    Clamped {
        /// The parsed value
        requested: String,
        /// The stored value
        stored: String,
        /// The bounds it was clamped to
        bounds: String,
    },
}

/// Static metadata for one configuration field.
#[derive(Clone, Copy)]
pub struct OptionDescriptor {
    /// Fully qualified dotted name, e.g. `general.gaps_in`.
    pub name: &'static str,
    /// Storage location and validator.
    pub slot: Slot,
}

impl OptionDescriptor {
    /// Creates a descriptor.
    pub const fn new(name: &'static str, slot: Slot) -> Self {
        Self { name, slot }
    }

    /// Section the option belongs to, e.g. `decoration.blur`.
    pub fn section(&self) -> &'static str {
        let name: &'static str = self.name;
        name[..name.len() - self.key().len()].trim_end_matches('.')
    }

    /// Option name within its section, e.g. `col.active_border`.
    pub fn key(&self) -> &'static str {
        SECTIONS
            .iter()
            .filter_map(|section| {
                self.name
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('.'))
            })
            .min_by_key(|rest| rest.len())
            .unwrap_or(self.name)
    }

    /// Value kind of the option.
    pub fn kind(&self) -> OptionKind {
        match self.slot {
            Slot::Bool(_) => OptionKind::Bool,
            Slot::Int(..) => OptionKind::Int,
            Slot::Float(..) => OptionKind::Float,
            Slot::Choice(..) => OptionKind::Choice,
            Slot::Keyword(..) => OptionKind::Keyword,
            Slot::Text(_) => OptionKind::Text,
            Slot::Color(_) => OptionKind::Color,
            Slot::Gradient(_) => OptionKind::Gradient,
            Slot::Gaps(_) => OptionKind::Gaps,
            Slot::Vec2(_) => OptionKind::Vec2,
        }
    }

    /// Human readable validator, if the option has one.
    pub fn validator(&self) -> Option<String> {
        match self.slot {
            Slot::Int(_, Some(bounds)) => Some(bounds.to_string()),
            Slot::Float(_, Some(bounds)) => Some(bounds.to_string()),
            Slot::Choice(_, allowed) => Some(format!(
                "one of {}",
                allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            )),
            Slot::Keyword(_, allowed) => Some(format!(
                "one of {}",
                allowed
                    .iter()
                    .map(|word| if word.is_empty() { "\"\"" } else { word })
                    .collect::<Vec<_>>()
                    .join("/")
            )),
            _ => None,
        }
    }

    /// Renders the value currently held by `config` for this option.
    pub fn display_value(&self, config: &mut Config) -> String {
        match self.slot {
            Slot::Bool(field) => field(config).to_string(),
            Slot::Int(field, _) | Slot::Choice(field, _) => field(config).to_string(),
            Slot::Float(field, _) => field(config).to_string(),
            Slot::Keyword(field, _) | Slot::Text(field) => format!("\"{}\"", field(config)),
            Slot::Color(field) => field(config).to_string(),
            Slot::Gradient(field) => field(config).to_string(),
            Slot::Gaps(field) => field(config).to_string(),
            Slot::Vec2(field) => field(config).to_string(),
        }
    }

    /// Parses `raw`, validates it and stores it in `config`.
    ///
    /// `raw` must already have its variable references substituted. On
    /// error `config` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Parse` if `raw` is malformed or not an allowed
    /// choice.
    pub fn apply(&self, config: &mut Config, raw: &str) -> std::result::Result<Applied, ValueError> {
        match self.slot {
            Slot::Bool(field) => {
                *field(config) = parse_bool(raw)?;
                Ok(Applied::Set)
            }
            Slot::Int(field, bounds) => {
                let value = parse_int(raw)?;
                Ok(store_bounded(field(config), value, bounds))
            }
            Slot::Float(field, bounds) => {
                let value = parse_float(raw)?;
                Ok(store_bounded(field(config), value, bounds))
            }
            Slot::Choice(field, allowed) => {
                let value = parse_int(raw)?;
                if !allowed.contains(&value) {
                    return Err(ValueError::parse(
                        raw,
                        "choice",
                        format!("expected one of {allowed:?}"),
                    ));
                }
                *field(config) = value;
                Ok(Applied::Set)
            }
            Slot::Keyword(field, allowed) => {
                let value = raw.trim();
                if !allowed.contains(&value) {
                    return Err(ValueError::parse(
                        raw,
                        "keyword",
                        format!("expected one of {allowed:?}"),
                    ));
                }
                *field(config) = value.to_string();
                Ok(Applied::Set)
            }
            Slot::Text(field) => {
                *field(config) = raw.trim().to_string();
                Ok(Applied::Set)
            }
            Slot::Color(field) => {
                *field(config) = parse_color(raw)?;
                Ok(Applied::Set)
            }
            Slot::Gradient(field) => {
                *field(config) = Gradient::parse(raw)?;
                Ok(Applied::Set)
            }
            Slot::Gaps(field) => {
                *field(config) = Gaps::parse(raw)?;
                Ok(Applied::Set)
            }
            Slot::Vec2(field) => {
                *field(config) = Vec2::parse(raw)?;
                Ok(Applied::Set)
            }
        }
    }

    /// Checks that the compiled default in `defaults` satisfies the validator.
    fn check_default(&self, defaults: &mut Config) -> Result<()> {
        let valid = match self.slot {
            Slot::Int(field, Some(bounds)) => bounds.contains(*field(defaults)),
            Slot::Float(field, Some(bounds)) => bounds.contains(*field(defaults)),
            Slot::Choice(field, allowed) => allowed.contains(field(defaults)),
            Slot::Keyword(field, allowed) => allowed.contains(&field(defaults).as_str()),
            Slot::Gradient(field) => !field(defaults).stops.is_empty(),
            _ => true,
        };

        if valid {
            Ok(())
        } else {
            Err(HyprconfError::descriptor(
                self.name,
                format!(
                    "default {} violates validator {}",
                    self.display_value(defaults),
                    self.validator().unwrap_or_default()
                ),
            ))
        }
    }
}

impl fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("validator", &self.validator())
            .finish()
    }
}

fn store_bounded<T>(field: &mut T, value: T, bounds: Option<Bounds<T>>) -> Applied
where
    T: PartialOrd + Copy + fmt::Display,
{
    let Some(bounds) = bounds else {
        *field = value;
        return Applied::Set;
    };

    let (stored, clamped) = bounds.clamp(value);
    *field = stored;

    if clamped {
        Applied::Clamped {
            requested: value.to_string(),
            stored: stored.to_string(),
            bounds: bounds.to_string(),
        }
    } else {
        Applied::Set
    }
}

/// Section prefixes, nested sections included.
pub const SECTIONS: &[&str] = &[
    "general",
    "decoration",
    "decoration.blur",
    "animations",
    "input",
    "gestures",
    "group",
    "group.groupbar",
    "misc",
    "binds",
    "xwayland",
    "opengl",
    "debug",
];

/// The validated, process-wide option table.
#[derive(Debug)]
pub struct OptionRegistry {
    options: Vec<OptionDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

static REGISTRY: OnceLock<Result<OptionRegistry>> = OnceLock::new();

impl OptionRegistry {
    /// Returns the global table, building and validating it on first use.
    ///
    /// # Errors
    ///
    /// Returns `HyprconfError::DescriptorTable` if the compiled table is
    /// inconsistent. This is a programming error, never a user error.
    pub fn global() -> Result<&'static OptionRegistry> {
        REGISTRY
            .get_or_init(|| Self::from_descriptors(options::all()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Builds a table from `options`, checking names and defaults.
    ///
    /// # Errors
    ///
    /// Returns `HyprconfError::DescriptorTable` for an empty or duplicate
    /// name, a name outside the known sections, or a default that fails
    /// its own validator.
    pub fn from_descriptors(options: Vec<OptionDescriptor>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(options.len());
        let mut defaults = Config::default();

        for (index, descriptor) in options.iter().enumerate() {
            if descriptor.name.trim().is_empty() {
                return Err(HyprconfError::descriptor(
                    descriptor.name,
                    format!("entry {index} has an empty name"),
                ));
            }

            if descriptor.key() == descriptor.name {
                return Err(HyprconfError::descriptor(
                    descriptor.name,
                    "name does not start with a known section",
                ));
            }

            if by_name.insert(descriptor.name, index).is_some() {
                return Err(HyprconfError::descriptor(descriptor.name, "duplicate name"));
            }

            descriptor.check_default(&mut defaults)?;
        }

        Ok(Self { options, by_name })
    }

    /// Looks up a descriptor by fully qualified name.
    pub fn find(&self, name: &str) -> Option<&OptionDescriptor> {
        self.by_name.get(name).map(|&index| &self.options[index])
    }

    /// All descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
