// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Entities built from definition files.
//!
//! A definition file describes two kinds of entities:
//!
//! - [`StereotypeIcon`]: a custom icon for model elements carrying a given
//!   stereotype, including a small vector program ([`IconShape`]) that
//!   draws it.
//! - [`Toolbar`]: an ordered list of [`Tool`]s offered in a diagram toolbar.
//!
//! Every entity carries the [`SourcePos`] of its header keyword.
//!
//! # Enumerated Values
//!
//! Property values such as `elements: class, item` or `display: icon` are
//! matched case-insensitively through [`FromStr`]. An unknown value yields a
//! [`ValueError`] that the parser turns into a grammar error at the value's
//! position.
//!
//! # Example
//!
//! ```
//! use shapedef_core::model::{IconShape, ShapeCommand, ShapeValue};
//!
//! let mut shape = IconShape::new();
//! shape.push(ShapeCommand::Circle {
//!     x: ShapeValue::scaled(0.0),
//!     y: ShapeValue::scaled(0.0),
//!     radius: ShapeValue::scaled(5.0),
//! });
//! shape.push(ShapeCommand::Close);
//! assert_eq!(shape.len(), 2);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use ecow::EcoString;
use thiserror::Error;

use crate::source_analysis::SourcePos;

/// Default icon width and height.
pub const DEFAULT_ICON_SIZE: f64 = 100.0;

/// An enumerated or color value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The text names no variant of the value's type.
    #[error("unknown value '{0}'")]
    Unknown(EcoString),

    /// A color literal with the wrong number of hex digits.
    #[error("invalid color '{0}': expected 3, 6 or 8 hex digits")]
    InvalidColor(EcoString),
}

/// Implements `as_str`, `Display` and case-insensitive `FromStr` for a
/// fieldless enum from one list of `Variant => "text"` pairs.
macro_rules! keyword_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Returns the lower-case name used in definition files.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ValueError::Unknown(s.into())),
                }
            }
        }
    };
}

// ============================================================================
// Shape Programs
// ============================================================================

/// How a [`ShapeValue`] is interpreted when the shape is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeUnit {
    /// A fixed value, independent of the drawn size (angles, pixel offsets).
    Absolute,
    /// A fraction of the drawn size.
    Relative,
    /// A value in icon coordinates, scaled from the icon's declared size to
    /// the drawn size.
    Scaled,
}

/// The edge a [`ShapeValue`] is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeOrigin {
    /// Chosen by the renderer from the parameter's role.
    Smart,
    Top,
    Left,
    TopOrLeft,
    Bottom,
    Right,
    BottomOrRight,
    Center,
}

/// One numeric parameter of a [`ShapeCommand`].
///
/// The unit and origin are not written in the source; the parser assigns
/// them from the parameter's name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeValue {
    /// The numeric value.
    pub value: f64,
    /// How the value is interpreted.
    pub unit: ShapeUnit,
    /// The edge the value is measured from.
    pub origin: ShapeOrigin,
}

impl ShapeValue {
    /// Creates a value with an explicit unit and origin.
    #[must_use]
    pub const fn new(value: f64, unit: ShapeUnit, origin: ShapeOrigin) -> Self {
        Self {
            value,
            unit,
            origin,
        }
    }

    /// Creates a [`ShapeUnit::Scaled`] value with a smart origin.
    #[must_use]
    pub const fn scaled(value: f64) -> Self {
        Self::new(value, ShapeUnit::Scaled, ShapeOrigin::Smart)
    }

    /// Creates a [`ShapeUnit::Absolute`] value with a smart origin.
    #[must_use]
    pub const fn absolute(value: f64) -> Self {
        Self::new(value, ShapeUnit::Absolute, ShapeOrigin::Smart)
    }

    /// Returns `true` for an absolute value with a smart origin, the only
    /// form allowed for angles.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.unit == ShapeUnit::Absolute && self.origin == ShapeOrigin::Smart
    }
}

/// One drawing command of an [`IconShape`].
///
/// Angles (`start`, `span`) are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeCommand {
    Circle {
        x: ShapeValue,
        y: ShapeValue,
        radius: ShapeValue,
    },
    Ellipse {
        x: ShapeValue,
        y: ShapeValue,
        radius_x: ShapeValue,
        radius_y: ShapeValue,
    },
    Line {
        x0: ShapeValue,
        y0: ShapeValue,
        x1: ShapeValue,
        y1: ShapeValue,
    },
    Rect {
        x: ShapeValue,
        y: ShapeValue,
        width: ShapeValue,
        height: ShapeValue,
    },
    RoundedRect {
        x: ShapeValue,
        y: ShapeValue,
        width: ShapeValue,
        height: ShapeValue,
        radius: ShapeValue,
    },
    Arc {
        x: ShapeValue,
        y: ShapeValue,
        radius_x: ShapeValue,
        radius_y: ShapeValue,
        start: ShapeValue,
        span: ShapeValue,
    },
    /// Starts a new path at the point.
    MoveTo { x: ShapeValue, y: ShapeValue },
    /// Draws a straight path segment to the point.
    LineTo { x: ShapeValue, y: ShapeValue },
    /// Starts a new path on the given point of an ellipse.
    ArcMoveTo {
        x: ShapeValue,
        y: ShapeValue,
        radius_x: ShapeValue,
        radius_y: ShapeValue,
        start: ShapeValue,
    },
    /// Draws an elliptic path segment.
    ArcTo {
        x: ShapeValue,
        y: ShapeValue,
        radius_x: ShapeValue,
        radius_y: ShapeValue,
        start: ShapeValue,
        span: ShapeValue,
    },
    /// Closes the current path.
    Close,
}

impl ShapeCommand {
    /// Returns the command's keyword.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Line { .. } => "line",
            Self::Rect { .. } => "rect",
            Self::RoundedRect { .. } => "roundedrect",
            Self::Arc { .. } => "arc",
            Self::MoveTo { .. } => "moveto",
            Self::LineTo { .. } => "lineto",
            Self::ArcMoveTo { .. } => "arcmoveto",
            Self::ArcTo { .. } => "arcto",
            Self::Close => "close",
        }
    }
}

/// An ordered list of drawing commands. Order is render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconShape {
    commands: Vec<ShapeCommand>,
}

impl IconShape {
    /// Creates an empty shape.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Appends a command.
    pub fn push(&mut self, command: ShapeCommand) {
        self.commands.push(command);
    }

    /// Returns the commands in render order.
    #[must_use]
    pub fn commands(&self) -> &[ShapeCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the shape has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the commands in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a IconShape {
    type Item = &'a ShapeCommand;
    type IntoIter = std::slice::Iter<'a, ShapeCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ShapeCommand> for IconShape {
    fn from_iter<I: IntoIterator<Item = ShapeCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Icon Properties
// ============================================================================

/// A kind of model element an icon applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    Package,
    Component,
    Class,
    Diagram,
    Item,
}

keyword_enum!(ElementType {
    Package => "package",
    Component => "component",
    Class => "class",
    Diagram => "diagram",
    Item => "item",
});

/// Which dimensions of an icon keep their declared size when resized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SizeLock {
    #[default]
    None,
    Width,
    Height,
    Size,
    /// Keep the aspect ratio.
    Ratio,
}

keyword_enum!(SizeLock {
    None => "none",
    Width => "width",
    Height => "height",
    Size => "size",
    Ratio => "ratio",
});

/// How an element carrying the stereotype is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    None,
    /// Show the stereotype as a `«label»`.
    Label,
    /// Show the icon as a small decoration on the element.
    Decoration,
    /// Replace the element with the icon.
    Icon,
    /// Let the diagram decide.
    #[default]
    Smart,
}

keyword_enum!(DisplayMode {
    None => "none",
    Label => "label",
    Decoration => "decoration",
    Icon => "icon",
    Smart => "smart",
});

/// Where the element name is placed relative to the icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    #[default]
    Below,
    Center,
    None,
}

keyword_enum!(TextAlignment {
    Below => "below",
    Center => "center",
    None => "none",
});

/// An RGBA color.
///
/// # Examples
///
/// ```
/// use shapedef_core::model::Color;
///
/// let color: Color = "#f80".parse().unwrap();
/// assert_eq!(color, Color::rgb(0xff, 0x88, 0x00));
/// assert_eq!(color.to_string(), "#ff8800");
/// assert!("#ff80".parse::<Color>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Creates a color with an alpha channel.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl FromStr for Color {
    type Err = ValueError;

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidColor(s.into());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(invalid)
        };
        match digits.len() {
            3 => {
                // Each digit is doubled: `#f80` is `#ff8800`.
                let short = |i: usize| channel(i..i + 1).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != u8::MAX {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// An icon definition: `icon <name> { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct StereotypeIcon {
    /// The identifier after the `icon` keyword.
    pub name: EcoString,
    /// The icon id. Never empty on an emitted icon.
    pub id: EcoString,
    /// Human-readable title.
    pub title: EcoString,
    /// Element kinds the icon applies to.
    pub elements: BTreeSet<ElementType>,
    /// Stereotypes the icon applies to.
    pub stereotypes: BTreeSet<EcoString>,
    /// Declared width in icon coordinates.
    pub width: f64,
    /// Declared height in icon coordinates.
    pub height: f64,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub size_lock: SizeLock,
    pub display: DisplayMode,
    pub text_alignment: TextAlignment,
    pub base_color: Option<Color>,
    /// The drawing program of the icon.
    pub icon_shape: IconShape,
    /// The drawing program of the element outline, when it differs from
    /// the icon.
    pub outline_shape: Option<IconShape>,
    /// Position of the `icon` keyword.
    pub pos: SourcePos,
}

impl StereotypeIcon {
    /// Creates an icon with default properties.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, pos: SourcePos) -> Self {
        Self {
            name: name.into(),
            id: EcoString::new(),
            title: EcoString::new(),
            elements: BTreeSet::new(),
            stereotypes: BTreeSet::new(),
            width: DEFAULT_ICON_SIZE,
            height: DEFAULT_ICON_SIZE,
            min_width: None,
            min_height: None,
            size_lock: SizeLock::default(),
            display: DisplayMode::default(),
            text_alignment: TextAlignment::default(),
            base_color: None,
            icon_shape: IconShape::new(),
            outline_shape: None,
            pos,
        }
    }

    /// Returns `true` if the icon applies to `stereotype`.
    #[must_use]
    pub fn has_stereotype(&self, stereotype: &str) -> bool {
        self.stereotypes.contains(stereotype)
    }

    /// Returns `true` if the icon applies to elements of `element`.
    #[must_use]
    pub fn applies_to(&self, element: ElementType) -> bool {
        self.elements.contains(&element)
    }
}

/// The kind of element a toolbar [`Tool`] creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolElement {
    Package,
    Component,
    Class,
    Item,
    Annotation,
    Boundary,
    Swimlane,
}

keyword_enum!(ToolElement {
    Package => "package",
    Component => "component",
    Class => "class",
    Item => "item",
    Annotation => "annotation",
    Boundary => "boundary",
    Swimlane => "swimlane",
});

/// One entry of a [`Toolbar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// A visual separator between groups of tools.
    Separator,
    /// A tool that creates an element.
    Element {
        /// Title shown on the tool.
        title: EcoString,
        /// The kind of element created.
        element: ToolElement,
        /// Stereotype applied to the created element.
        stereotype: Option<EcoString>,
    },
}

/// A toolbar definition: `toolbar <name> { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    /// The identifier after the `toolbar` keyword.
    pub name: EcoString,
    /// The toolbar id. Never empty on an emitted toolbar.
    pub id: EcoString,
    /// Ordering among toolbars; higher comes first.
    pub priority: i32,
    /// Tools in display order.
    pub tools: Vec<Tool>,
    /// Position of the `toolbar` keyword.
    pub pos: SourcePos,
}

impl Toolbar {
    /// Creates an empty toolbar.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, pos: SourcePos) -> Self {
        Self {
            name: name.into(),
            id: EcoString::new(),
            priority: 0,
            tools: Vec::new(),
            pos,
        }
    }

    /// Returns the number of tools, not counting separators.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.tools
            .iter()
            .filter(|tool| !matches!(tool, Tool::Separator))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_values_ignore_case() {
        assert_eq!("CLASS".parse::<ElementType>(), Ok(ElementType::Class));
        assert_eq!("Ratio".parse::<SizeLock>(), Ok(SizeLock::Ratio));
        assert_eq!("icon".parse::<DisplayMode>(), Ok(DisplayMode::Icon));
        assert_eq!("Center".parse::<TextAlignment>(), Ok(TextAlignment::Center));
        assert_eq!("swimLane".parse::<ToolElement>(), Ok(ToolElement::Swimlane));
    }

    #[test]
    fn unknown_enum_value() {
        assert_eq!(
            "diagram".parse::<ToolElement>(),
            Err(ValueError::Unknown("diagram".into()))
        );
        assert_eq!(
            "sideways".parse::<TextAlignment>().map_err(|e| e.to_string()),
            Err("unknown value 'sideways'".to_string())
        );
    }

    #[test]
    fn enum_display_round_trips_names() {
        assert_eq!(ElementType::Diagram.to_string(), "diagram");
        assert_eq!(DisplayMode::Decoration.as_str(), "decoration");
    }

    #[test]
    fn color_lengths() {
        assert_eq!("#123".parse::<Color>(), Ok(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!("#A0B1C2".parse::<Color>(), Ok(Color::rgb(0xa0, 0xb1, 0xc2)));
        assert_eq!("#a0b1c280".parse::<Color>(), Ok(Color::rgba(0xa0, 0xb1, 0xc2, 0x80)));
        for bad in ["#", "#1", "#1234", "#12345", "#1234567", "#123456789", "123456"] {
            assert_eq!(
                bad.parse::<Color>(),
                Err(ValueError::InvalidColor(bad.into())),
                "{bad}"
            );
        }
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::rgb(1, 2, 255).to_string(), "#0102ff");
        assert_eq!(Color::rgba(1, 2, 255, 0).to_string(), "#0102ff00");
    }

    #[test]
    fn icon_defaults() {
        let icon = StereotypeIcon::new("Foo", SourcePos::default());
        assert!(icon.id.is_empty());
        assert!(icon.title.is_empty());
        assert!((icon.width - DEFAULT_ICON_SIZE).abs() < f64::EPSILON);
        assert!((icon.height - DEFAULT_ICON_SIZE).abs() < f64::EPSILON);
        assert_eq!(icon.min_width, None);
        assert_eq!(icon.size_lock, SizeLock::None);
        assert_eq!(icon.display, DisplayMode::Smart);
        assert_eq!(icon.text_alignment, TextAlignment::Below);
        assert_eq!(icon.base_color, None);
        assert!(icon.icon_shape.is_empty());
        assert!(icon.outline_shape.is_none());
    }

    #[test]
    fn icon_set_helpers() {
        let mut icon = StereotypeIcon::new("Foo", SourcePos::default());
        icon.stereotypes.insert("interface".into());
        icon.elements.insert(ElementType::Class);
        assert!(icon.has_stereotype("interface"));
        assert!(!icon.has_stereotype("entity"));
        assert!(icon.applies_to(ElementType::Class));
        assert!(!icon.applies_to(ElementType::Package));
    }

    #[test]
    fn toolbar_counts_tools_without_separators() {
        let mut toolbar = Toolbar::new("Main", SourcePos::default());
        toolbar.tools.push(Tool::Element {
            title: "Class".into(),
            element: ToolElement::Class,
            stereotype: None,
        });
        toolbar.tools.push(Tool::Separator);
        toolbar.tools.push(Tool::Element {
            title: "Note".into(),
            element: ToolElement::Annotation,
            stereotype: Some("note".into()),
        });
        assert_eq!(toolbar.tool_count(), 2);
        assert_eq!(toolbar.tools.len(), 3);
    }

    #[test]
    fn shape_iteration_order() {
        let shape: IconShape = [
            ShapeCommand::MoveTo {
                x: ShapeValue::scaled(0.0),
                y: ShapeValue::scaled(0.0),
            },
            ShapeCommand::Close,
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = shape.iter().map(ShapeCommand::name).collect();
        assert_eq!(names, vec!["moveto", "close"]);
        assert_eq!((&shape).into_iter().count(), 2);
    }

    #[test]
    fn absolute_values() {
        assert!(ShapeValue::absolute(90.0).is_absolute());
        assert!(!ShapeValue::scaled(90.0).is_absolute());
        assert!(!ShapeValue::new(90.0, ShapeUnit::Absolute, ShapeOrigin::Top).is_absolute());
    }
}
